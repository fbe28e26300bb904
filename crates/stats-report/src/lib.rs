//! Email report drain for Redis-buffered stats channels.
//!
//! Drains each routed channel through `stats-queue` and sends one mail
//! per non-empty batch to that channel's recipients. Sends are
//! sequential and fail fast: there is no retry and no partial-success
//! accounting. At-least-once delivery risk is accepted; recovery
//! belongs to the operator layer.

pub mod config;
pub mod error;
pub mod mailer;
pub mod reporter;

#[cfg(test)]
mod tests;

pub use config::{MailConfig, RecipientRule, ReportConfig};
pub use error::{MailError, MailResult, ReportError, ReportResult};
pub use mailer::{MailRequest, Mailer, SmtpMailer};
pub use reporter::{send_report, send_report_with};
