use thiserror::Error;

/// Errors from draft store operations (used by trait definitions in meetbot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the external meeting store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("meeting store unavailable")]
    Unavailable,

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("worksheet '{0}' not found")]
    WorksheetNotFound(String),

    #[error("invalid row: {0}")]
    InvalidRow(String),
}

/// Errors while loading configuration or secrets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing secret: {0}")]
    MissingSecret(String),

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}
