//! Error types for the ECX client.
//!
//! # Design
//! Failures are split by where they happened so callers can branch on kind:
//! the transport never produced a response, the server answered with an
//! error status, a success body did not match its schema, or the caller
//! broke a contract before anything was sent. The first two carry the same
//! normalized `RestError` payload regardless of which error shape the server
//! used.

use thiserror::Error;

/// One provider error entry: a short code plus its human-readable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Normalized error produced for every failed call.
///
/// `errors` is empty when the body matched neither provider error shape (in
/// which case `message` holds the raw body) or when no response was
/// received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ecx rest error: httpCode: {}, message: {message}", .http_status.unwrap_or_default())]
pub struct RestError {
    pub http_status: Option<u16>,
    pub message: String,
    pub errors: Vec<ErrorDetail>,
}

impl RestError {
    /// Whether any entry carries the given provider error code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

/// Errors returned by `EcxClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response: connection failure, timeout or cancellation.
    #[error("transport failure: {0}")]
    TransportError(RestError),

    /// The server answered with a status of 400 or above.
    #[error(transparent)]
    HttpError(RestError),

    /// A success response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The call was rejected before reaching the network.
    #[error("precondition failed: {0}")]
    PreconditionError(String),

    /// A client-side lookup found no matching entity.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Normalized payload for transport and HTTP failures.
    pub fn rest_error(&self) -> Option<&RestError> {
        match self {
            ApiError::TransportError(e) | ApiError::HttpError(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status observed for this failure, if any response was received.
    pub fn http_status(&self) -> Option<u16> {
        self.rest_error().and_then(|e| e.http_status)
    }
}
