use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Selection error: {message}")]
    Selection { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Completion service errors
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion service unavailable: {message} (retries: {retries})")]
    Unavailable { message: String, retries: u32 },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Reply schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Reply schema validation errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("planning must not be empty")]
    EmptyPlanning,

    #[error("response is required and must be non-empty when not forfeiting")]
    MissingResponse,

    #[error("reason_for_forfeit is required and must be non-empty when forfeiting")]
    MissingForfeitReason,

    #[error("{field} exceeds {limit} characters (got {len})")]
    FieldTooLong {
        field: &'static str,
        limit: usize,
        len: usize,
    },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for completion service operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Result type alias for reply schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;
