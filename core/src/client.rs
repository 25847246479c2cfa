//! Stateless request builder and response parser for the hosted object store.
//!
//! # Design
//! `StoreClient` holds only a base URL and carries no state between calls.
//! Each of the four store operations (create, query-all, update-by-id,
//! delete-by-id) is split into a `build_*` method producing an
//! [`HttpRequest`] and a `parse_*` method consuming an [`HttpResponse`], so
//! the wire format is testable without any network in the loop.

use uuid::Uuid;

use crate::error::StoreError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::item::{CreateItem, Item, UpdateItem};

/// Deterministic client for the object-store wire format.
///
/// The transport between `build_*` and `parse_*` is someone else's job;
/// see [`HttpStore`](crate::store::HttpStore) for the production executor.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, StoreError> {
        let body = serde_json::to_string(input).map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/items", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_item(&self, id: Uuid, input: &UpdateItem) -> Result<HttpRequest, StoreError> {
        let body = serde_json::to_string(input).map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/items/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, StoreError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Parse a query-all response. The returned order is the store's and is
    /// authoritative; nothing downstream re-sorts it.
    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, StoreError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, StoreError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Successful deletes return no body, so there is nothing to map.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), StoreError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-expected status codes onto `StoreError` variants.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), StoreError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(StoreError::NotFound);
    }
    Err(StoreError::Http {
        status: response.status,
        message: response.body.clone(),
    })
}
