//! Sync core for a to-do list backed by a hosted object store.
//!
//! # Overview
//! The whole flow is: user intent → [`ListController`] → [`TodoListViewModel`]
//! → one [`ObjectStore`] call → one [`ListEvent`] back over a channel → the
//! controller folds it into its [`ListState`]. The list and the store
//! converge after every successful operation; while a call is in flight they
//! may diverge, and concurrent writes to one id resolve as last response
//! wins.
//!
//! # Design
//! - The wire layer keeps the build/parse split: [`StoreClient`] produces
//!   and consumes plain data, [`HttpStore`] runs the actual round-trips.
//! - The view model emits events instead of invoking callbacks, so nothing
//!   holds a back-reference into UI code.
//! - Records without a title exist in the store but not in the UI;
//!   [`ItemViewModel::from_item`] is where they drop out.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod item;
pub mod list;
pub mod store;
pub mod viewmodel;

pub use client::StoreClient;
pub use controller::ListController;
pub use error::StoreError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use item::{CreateItem, Item, ItemViewModel, UpdateItem};
pub use list::ListState;
pub use store::{HttpStore, ObjectStore};
pub use viewmodel::{ListEvent, ListUpdate, TodoListViewModel};
