//! Plain-data HTTP types shared by the request builder and the transport.
//!
//! # Design
//! The store client never touches the network: it produces `HttpRequest`
//! values and consumes `HttpResponse` values, and some executor (the
//! production [`HttpStore`](crate::store::HttpStore), or a test harness)
//! performs the round-trip in between. Keeping the wire description as
//! owned plain data is what makes the client deterministic and unit-testable
//! without a server.

/// HTTP method of a store request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A store request described as data. Built by `StoreClient::build_*`;
/// executed by the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A store response described as data. Produced by the transport and handed
/// to `StoreClient::parse_*` for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
