//! Server-side error type, converted to `ServerFnError` at the boundary.

use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// A failure inside a server function. Clients see its `Display` text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("{0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl From<ApiError> for ServerFnError {
    fn from(err: ApiError) -> Self {
        ServerFnError::new(err.to_string())
    }
}
