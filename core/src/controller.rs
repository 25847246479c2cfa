//! Glue between user intents, the view model, and the visible list.
//!
//! # Design
//! `ListController` owns the view model outright and holds the receiving end
//! of its event channel. Intent methods spawn the matching view-model
//! operation and return immediately; outcomes arrive later through
//! [`process_next`](ListController::process_next), which is the single place
//! the list state mutates. Whatever task drives `process_next` plays the
//! role of the UI thread: run it from one place and the "mutate the visible
//! list only on the main context" rule holds by construction.

use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::item::ItemViewModel;
use crate::list::ListState;
use crate::store::ObjectStore;
use crate::viewmodel::{ListEvent, TodoListViewModel};

/// Owns the list screen's state and its view model.
pub struct ListController<S> {
    view_model: Arc<TodoListViewModel<S>>,
    events: mpsc::UnboundedReceiver<ListEvent>,
    state: ListState,
}

impl<S: ObjectStore> ListController<S> {
    pub fn new(store: S) -> Self {
        let (view_model, events) = TodoListViewModel::new(store);
        Self {
            view_model: Arc::new(view_model),
            events,
            state: ListState::new(),
        }
    }

    /// The rows currently visible, in order.
    pub fn items(&self) -> &[ItemViewModel] {
        self.state.items()
    }

    /// Re-fetch everything from the store.
    pub fn refresh(&self) {
        let vm = Arc::clone(&self.view_model);
        tokio::spawn(async move { vm.read_all().await });
    }

    /// Add a new item with the confirmed inputs.
    pub fn add_item(&self, title: String, description: Option<String>) {
        let vm = Arc::clone(&self.view_model);
        tokio::spawn(async move { vm.create_item(&title, description.as_deref()).await });
    }

    /// Overwrite an existing item with the confirmed inputs.
    pub fn edit_item(&self, id: Uuid, title: String, description: Option<String>) {
        let vm = Arc::clone(&self.view_model);
        tokio::spawn(async move { vm.update_item(id, &title, description.as_deref()).await });
    }

    /// Delete the item behind a row.
    pub fn remove_item(&self, model: ItemViewModel) {
        let vm = Arc::clone(&self.view_model);
        tokio::spawn(async move { vm.delete_item(model).await });
    }

    /// Wait for the next outcome, fold any list update into the state, and
    /// hand the event back so the caller can render or present a message.
    /// Returns `None` only if the view model side of the channel is gone.
    pub async fn process_next(&mut self) -> Option<ListEvent> {
        let event = self.events.recv().await?;
        if let ListEvent::Update(update) = &event {
            self.state.apply(update.clone());
        }
        Some(event)
    }
}
