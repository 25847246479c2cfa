//! In-process stand-in for the hosted object store.
//!
//! Records live in a `Vec` behind an `RwLock` so query-all returns them in
//! insertion order; clients treat store order as authoritative, and a
//! map-backed store would shuffle it. The store itself never requires a
//! title — enforcing that is the client's concern — so title-less records
//! can be seeded here to exercise the client's drop path.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Update payload. Both fields replace the stored values outright; `null`
/// clears a field rather than preserving it.
#[derive(Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", axum::routing::put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let now = Utc::now();
    let item = Item {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        created_at: now,
        updated_at: now,
    };
    db.write().await.push(item.clone());
    info!(%item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    item.title = input.title;
    item.description = input.description;
    item.updated_at = Utc::now();
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut items = db.write().await;
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(%id, "deleted item");
    Ok(StatusCode::NO_CONTENT)
}
