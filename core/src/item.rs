//! Domain records and their UI-facing projection.
//!
//! # Design
//! `Item` mirrors the store's schema but is defined independently from the
//! mock-server crate; integration tests catch schema drift. The store does
//! not enforce a title, so `title` is optional on the record. The UI layer
//! requires one, which is why `ItemViewModel::from_item` is fallible: a
//! title-less record simply has no view-model representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted to-do record as the store returns it.
///
/// The store assigns `id` on creation and both timestamps on every save;
/// none of them are ever set client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new record. No identifier: the store
/// assigns one and echoes the full record back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Request payload for updating an existing record. Both fields are written
/// as-is — an edit replaces the record's content wholesale, so `None` clears
/// the field rather than leaving it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The UI-facing projection of an [`Item`]: title required, description
/// optional. Immutable value; the list replaces whole elements on update
/// and never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemViewModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl ItemViewModel {
    /// Project a store record into a view model. Returns `None` when the
    /// record has no title, since the list cannot display it.
    pub fn from_item(item: Item) -> Option<Self> {
        let title = item.title?;
        Some(Self {
            id: item.id,
            title,
            description: item.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>, description: Option<&str>) -> Item {
        Item {
            id: Uuid::nil(),
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn item_roundtrips_through_json() {
        let original = item(Some("Buy milk"), Some("2% if they have it"));
        let json = serde_json::to_string(&original).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn item_accepts_null_title_and_description() {
        let parsed: Item = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","title":null,"description":null,
                "created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(parsed.title.is_none());
        assert!(parsed.description.is_none());
    }

    #[test]
    fn view_model_projects_titled_record() {
        let model = ItemViewModel::from_item(item(Some("Buy milk"), None)).unwrap();
        assert_eq!(model.title, "Buy milk");
        assert!(model.description.is_none());
    }

    #[test]
    fn view_model_rejects_title_less_record() {
        assert!(ItemViewModel::from_item(item(None, Some("orphaned"))).is_none());
    }
}
