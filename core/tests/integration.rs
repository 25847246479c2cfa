//! Full control-flow test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the whole chain —
//! controller intent, spawned view-model operation, real HTTP round-trip,
//! event back over the channel, list mutation — and checks that the visible
//! list converges with the store after every step.

use todolist_core::{
    CreateItem, HttpStore, ItemViewModel, ListController, ListEvent, ListUpdate, ObjectStore,
};

async fn start_store() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await });
    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread")]
async fn crud_lifecycle_keeps_list_and_store_converged() {
    let base_url = start_store().await;
    let mut controller = ListController::new(HttpStore::new(&base_url));

    // initial fetch of an empty store
    controller.refresh();
    let event = controller.process_next().await.unwrap();
    assert!(matches!(
        event,
        ListEvent::Update(ListUpdate::ReplaceAll(ref models)) if models.is_empty()
    ));
    assert!(controller.items().is_empty());

    // add
    controller.add_item("Walk dog".to_string(), Some("before lunch".to_string()));
    let event = controller.process_next().await.unwrap();
    assert!(matches!(event, ListEvent::Update(ListUpdate::Append(_))));
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].title, "Walk dog");
    assert_eq!(controller.items()[0].description.as_deref(), Some("before lunch"));
    let id = controller.items()[0].id;

    // edit, clearing the description
    controller.edit_item(id, "Walk dog twice".to_string(), None);
    let event = controller.process_next().await.unwrap();
    assert!(matches!(event, ListEvent::Update(ListUpdate::UpdateById(_))));
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].id, id);
    assert_eq!(controller.items()[0].title, "Walk dog twice");
    assert!(controller.items()[0].description.is_none());

    // a second add lands after the first, matching store order
    controller.add_item("Feed cat".to_string(), None);
    controller.process_next().await.unwrap();
    assert_eq!(controller.items().len(), 2);
    assert_eq!(controller.items()[1].title, "Feed cat");

    // refresh must agree with the local state built up incrementally
    let local: Vec<ItemViewModel> = controller.items().to_vec();
    controller.refresh();
    controller.process_next().await.unwrap();
    assert_eq!(controller.items(), local.as_slice());

    // remove
    let doomed = controller.items()[0].clone();
    controller.remove_item(doomed.clone());
    let event = controller.process_next().await.unwrap();
    assert!(matches!(event, ListEvent::Update(ListUpdate::DeleteById(_))));
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].title, "Feed cat");

    // removing the same row again: the store answers 404, the user gets one
    // message, and the list does not change
    controller.remove_item(doomed);
    let event = controller.process_next().await.unwrap();
    match event {
        ListEvent::Message { title, body } => {
            assert_eq!(title, "Error");
            assert!(body.starts_with("Failed to delete item: "), "got {body:?}");
        }
        other => panic!("expected Message, got {other:?}"),
    }
    assert_eq!(controller.items().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_drops_title_less_records_in_store_order() {
    let base_url = start_store().await;
    let store = HttpStore::new(&base_url);

    // Seed directly through the store, including a record the UI cannot show.
    for (title, description) in [
        (Some("first"), None),
        (None, Some("no title, never displayed")),
        (Some("third"), None),
    ] {
        store
            .create(&CreateItem {
                title: title.map(str::to_string),
                description: description.map(str::to_string),
            })
            .await
            .unwrap();
    }

    let mut controller = ListController::new(store);
    controller.refresh();
    controller.process_next().await.unwrap();

    let titles: Vec<&str> = controller.items().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "third"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_of_unknown_id_surfaces_one_message() {
    let base_url = start_store().await;
    let mut controller = ListController::new(HttpStore::new(&base_url));

    controller.edit_item(uuid::Uuid::new_v4(), "ghost".to_string(), None);
    let event = controller.process_next().await.unwrap();
    match event {
        ListEvent::Message { body, .. } => {
            assert!(body.starts_with("Failed to update item: "), "got {body:?}");
        }
        other => panic!("expected Message, got {other:?}"),
    }
    assert!(controller.items().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_surfaces_transport_failure_as_message() {
    // Nothing listens here; the connection is refused.
    let mut controller = ListController::new(HttpStore::new("http://127.0.0.1:1"));

    controller.refresh();
    let event = controller.process_next().await.unwrap();
    match event {
        ListEvent::Message { title, body } => {
            assert_eq!(title, "Error");
            assert!(body.starts_with("Failed to fetch items: "), "got {body:?}");
        }
        other => panic!("expected Message, got {other:?}"),
    }
}
