//! Mail-sending capability.
//!
//! The reporter talks to mail through the narrow [`Mailer`] trait and
//! receives it as an injected, already-initialized capability.
//! [`SmtpMailer`] is the lettre-backed SMTP implementation.

use crate::config::MailConfig;
use crate::error::MailResult;
use async_trait::async_trait;
use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// One send request: a named template, sender identity, recipients
/// and the structured payload for the template.
#[derive(Debug, Clone)]
pub struct MailRequest {
    pub template: String,
    pub from: String,
    pub reply_to: String,
    pub to: Vec<String>,
    pub data: serde_json::Value,
}

/// Mail-sending capability consumed by the reporter.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message. Failures propagate; there is no retry here.
    async fn send(&self, request: MailRequest) -> MailResult<()>;
}

/// SMTP mailer over a lettre STARTTLS relay.
///
/// Template rendering is delegated to the receiving side: the template
/// name becomes the subject line and the payload ships as
/// pretty-printed JSON.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a mailer from SMTP configuration. No connection is opened
    /// yet; lettre connects on first send.
    pub fn new(config: &MailConfig) -> MailResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, request: MailRequest) -> MailResult<()> {
        let subject = format!("{} {}", request.template, Utc::now().format("%Y-%m-%d"));

        let mut builder = Message::builder()
            .from(request.from.parse::<Mailbox>()?)
            .reply_to(request.reply_to.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);

        for to in &request.to {
            builder = builder.to(to.parse::<Mailbox>()?);
        }

        let body = serde_json::to_string_pretty(&request.data)?;
        let message = builder.body(body)?;

        self.transport.send(message).await?;

        debug!(
            template = %request.template,
            recipients = request.to.len(),
            "Sent mail"
        );
        Ok(())
    }
}
