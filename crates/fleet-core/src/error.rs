//! Error types for each layer.

use thiserror::Error;

/// Failures of a call through the `InventoryApi` port.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Errors that reach a route's error boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    InvalidForm(String),

    #[error("No action is defined for {0}")]
    MethodNotAllowed(String),

    #[error("Too many redirects while navigating to {0}")]
    TooManyRedirects(String),

    #[error("{0}")]
    Failed(String),
}

/// Session storage failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session data is corrupt: {0}")]
    Serialization(String),
}

/// Domain errors - business rule failures on the API side.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}
