//! Store-operation errors.
//!
//! # Design
//! There is a single error kind from the UI's point of view: "the store
//! operation failed, here is a human-readable message". The variants below
//! exist so the `Display` text names what actually went wrong; the view
//! model renders every one of them the same way, behind a fixed per-operation
//! prefix. `NotFound` keeps its own variant because late deletes against an
//! already-removed id are the one case callers may want to tell apart.

use thiserror::Error;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has no record with the requested identifier.
    #[error("no such item in the store")]
    NotFound,

    /// The store answered with an unexpected status. `message` is the raw
    /// response body, which the hosted service uses for its error text.
    #[error("store returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded into the expected record shape.
    #[error("could not decode store response: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("could not encode request payload: {0}")]
    Encode(String),

    /// The request never produced a response (connection refused, DNS
    /// failure, broken transfer).
    #[error("transport failure: {0}")]
    Transport(String),
}
