//! Report and mail error types.

use thiserror::Error;

/// Mail collaborator error type.
#[derive(Error, Debug)]
pub enum MailError {
    /// Recipient or sender address failed to parse
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message construction error
    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Payload serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Send failure from a non-SMTP mailer
    #[error("Send failed: {0}")]
    Send(String),
}

/// Result type for mail operations.
pub type MailResult<T> = Result<T, MailError>;

/// Report error type.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Queue drain error
    #[error("Queue error: {0}")]
    Queue(#[from] stats_queue::QueueError),

    /// Mail send error
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
