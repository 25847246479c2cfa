//! The store seam: an async CRUD trait plus the reqwest-backed implementation.
//!
//! # Design
//! [`ObjectStore`] is the narrow boundary between the view model and the
//! hosted service. The view model only ever sees this trait, so tests swap
//! in an in-memory double and never open a socket. [`HttpStore`] is the
//! production implementation: it executes the plain-data requests built by
//! [`StoreClient`] and hands the responses back for parsing. No retries, no
//! cancellation; one call, one outcome.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::item::{CreateItem, Item, UpdateItem};

/// Asynchronous CRUD operations against the hosted object store.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Save a new record. The store assigns the identifier and timestamps
    /// and echoes the full record back.
    async fn create(&self, input: &CreateItem) -> Result<Item, StoreError>;

    /// Fetch every record, in store order.
    async fn fetch_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Overwrite the record with identifier `id` and return the result.
    async fn update(&self, id: Uuid, input: &UpdateItem) -> Result<Item, StoreError>;

    /// Remove the record with identifier `id`. Deletes return no body.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// [`ObjectStore`] over real HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: StoreClient,
    http: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: StoreClient::new(base_url),
            http: reqwest::Client::new(),
        }
    }

    /// Execute one built request and capture the response as plain data.
    /// Non-2xx statuses are returned as data, not errors, so the parse
    /// methods keep ownership of status interpretation.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        debug!(%request.url, ?request.method, "issuing store request");

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl ObjectStore for HttpStore {
    async fn create(&self, input: &CreateItem) -> Result<Item, StoreError> {
        let request = self.client.build_create_item(input)?;
        let response = self.execute(request).await?;
        self.client.parse_create_item(response)
    }

    async fn fetch_all(&self) -> Result<Vec<Item>, StoreError> {
        let request = self.client.build_list_items();
        let response = self.execute(request).await?;
        self.client.parse_list_items(response)
    }

    async fn update(&self, id: Uuid, input: &UpdateItem) -> Result<Item, StoreError> {
        let request = self.client.build_update_item(id, input)?;
        let response = self.execute(request).await?;
        self.client.parse_update_item(response)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let request = self.client.build_delete_item(id);
        let response = self.execute(request).await?;
        self.client.parse_delete_item(response)
    }
}
