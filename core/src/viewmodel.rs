//! The view-model layer: one store call per user action, one emission per
//! outcome.
//!
//! # Design
//! `TodoListViewModel` holds no list state of its own. Each operation issues
//! a single store call and translates the outcome into exactly one
//! [`ListEvent`] pushed over an unbounded channel: a [`ListUpdate`] on
//! success, a user-facing message on failure. The controller subscribes to
//! the channel instead of being captured by completion callbacks, so there
//! are no back-references to keep alive.
//!
//! Operations are `async fn`s that return nothing; callers spawn them for
//! fire-and-forget semantics. A failure is terminal for that invocation and
//! surfaces once. Nothing is retried.

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::item::{CreateItem, Item, ItemViewModel, UpdateItem};
use crate::store::ObjectStore;

/// How the visible list must change. Each variant carries the affected view
/// models in the order they should be considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    /// Discard the whole list and replace it with these elements.
    ReplaceAll(Vec<ItemViewModel>),
    /// Insert these elements at the end, preserving arrival order.
    Append(Vec<ItemViewModel>),
    /// Replace the element with the matching id in place; unknown ids are
    /// ignored so late or duplicate completions are harmless.
    UpdateById(Vec<ItemViewModel>),
    /// Remove the element with the matching id; unknown ids are ignored.
    DeleteById(Vec<ItemViewModel>),
}

/// Everything the view model can emit: a list mutation or a message for the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Update(ListUpdate),
    Message { title: String, body: String },
}

/// Issues store operations for user intents and reports outcomes over the
/// event channel. Owns nothing else.
pub struct TodoListViewModel<S> {
    store: S,
    events: mpsc::UnboundedSender<ListEvent>,
}

impl<S: ObjectStore> TodoListViewModel<S> {
    /// Build a view model over `store` together with the receiving end of
    /// its event channel.
    pub fn new(store: S) -> (Self, mpsc::UnboundedReceiver<ListEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self { store, events }, receiver)
    }

    /// Save a new to-do item. An empty or whitespace title is discarded
    /// before any network traffic: no request, no event.
    pub async fn create_item(&self, title: &str, description: Option<&str>) {
        if title.trim().is_empty() {
            debug!("discarding create with empty title");
            return;
        }
        let input = CreateItem {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
        };
        match self.store.create(&input).await {
            Ok(item) => {
                if let Some(model) = self.project(item) {
                    self.emit(ListUpdate::Append(vec![model]));
                }
            }
            Err(err) => self.fail("save item", &err),
        }
    }

    /// Fetch every record and rebuild the list in store order.
    pub async fn read_all(&self) {
        match self.store.fetch_all().await {
            Ok(items) => {
                let models = items
                    .into_iter()
                    .filter_map(|item| self.project(item))
                    .collect();
                self.emit(ListUpdate::ReplaceAll(models));
            }
            Err(err) => self.fail("fetch items", &err),
        }
    }

    /// Overwrite an existing item's fields. The same empty-title guard as
    /// [`create_item`](Self::create_item) applies.
    pub async fn update_item(&self, id: Uuid, new_title: &str, new_description: Option<&str>) {
        if new_title.trim().is_empty() {
            debug!(%id, "discarding update with empty title");
            return;
        }
        let input = UpdateItem {
            title: Some(new_title.to_string()),
            description: new_description.map(str::to_string),
        };
        match self.store.update(id, &input).await {
            Ok(item) => {
                if let Some(model) = self.project(item) {
                    self.emit(ListUpdate::UpdateById(vec![model]));
                }
            }
            Err(err) => self.fail("update item", &err),
        }
    }

    /// Delete the record behind `model`. On success the instruction carries
    /// the original view model, since deletes return no body to map.
    pub async fn delete_item(&self, model: ItemViewModel) {
        match self.store.delete(model.id).await {
            Ok(()) => self.emit(ListUpdate::DeleteById(vec![model])),
            Err(err) => self.fail("delete item", &err),
        }
    }

    /// Project a store record, logging the drop when it has no title. The
    /// record still exists remotely; it just cannot be shown.
    fn project(&self, item: Item) -> Option<ItemViewModel> {
        let id = item.id;
        let model = ItemViewModel::from_item(item);
        if model.is_none() {
            warn!(%id, "dropping title-less record from the store");
        }
        model
    }

    fn emit(&self, update: ListUpdate) {
        // A closed channel means the subscriber is gone; nothing to update.
        let _ = self.events.send(ListEvent::Update(update));
    }

    fn fail(&self, action: &str, err: &StoreError) {
        let _ = self.events.send(ListEvent::Message {
            title: "Error".to_string(),
            body: format!("Failed to {action}: {err}"),
        });
    }
}
