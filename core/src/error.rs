//! Error types for the customer API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `MissingCustomerId` covers a create response
//! that decoded but carries no usable identifier.

use thiserror::Error;

/// Failure raised by a `Transport` before any HTTP status was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Errors returned by `CustomerClient` parse methods and store operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A create response decoded but `customer.id` was absent or empty.
    #[error("customer id missing from create response")]
    MissingCustomerId,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
