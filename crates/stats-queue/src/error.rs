//! Queue error types.

use thiserror::Error;

/// Queue error type.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Redis connection or operation error
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Store operation error from a non-Redis backend
    #[error("Store error: {0}")]
    Store(String),

    /// Event serialization or parse error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;
