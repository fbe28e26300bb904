//! Reporter: drain each routed channel and mail the batch.

use crate::config::{RecipientRule, ReportConfig};
use crate::error::ReportResult;
use crate::mailer::{MailRequest, Mailer, SmtpMailer};
use serde_json::json;
use stats_queue::drainer::drain_channel;
use stats_queue::store::{ChannelStore, RedisStore};
use tracing::{info, warn};

/// Template used for every report mail.
const REPORT_TEMPLATE: &str = "report";

/// Fixed sender identity for report mail.
const REPORT_FROM: &str = "no-reply@stats.example.com";
const REPORT_REPLY_TO: &str = "admin@stats.example.com";

/// Drain every routed channel and send one mail per non-empty batch.
///
/// Builds an [`SmtpMailer`] from configuration and delegates to
/// [`send_report_with`]. Missing Redis or mail configuration is a
/// logged no-op, never an error.
pub async fn send_report(config: &ReportConfig) -> ReportResult<()> {
    if config.queue.redis.is_none() {
        warn!("Redis is not configured, impossible to send report");
        return Ok(());
    }

    let Some(mail) = &config.mail else {
        warn!("Mail is not configured, impossible to send report");
        return Ok(());
    };

    let mailer = SmtpMailer::new(mail)?;
    send_report_with(config, &mailer).await
}

/// [`send_report`] with an already-initialized mail capability.
///
/// Opens a store connection scoped to this run and walks the routing
/// rules via [`deliver_rules`]. An empty rule list performs no store
/// reads and no sends.
pub async fn send_report_with(config: &ReportConfig, mailer: &dyn Mailer) -> ReportResult<()> {
    let Some(redis) = &config.queue.redis else {
        warn!("Redis is not configured, impossible to send report");
        return Ok(());
    };

    let Some(rules) = &config.send_to else {
        warn!("No recipient rules configured, nothing to do");
        return Ok(());
    };

    if rules.is_empty() {
        return Ok(());
    }

    let mut store = RedisStore::connect(redis).await?;
    deliver_rules(&mut store, rules, mailer).await
}

/// Process routing rules in declaration order on the given store:
/// drain each channel, skip silently when the batch is empty,
/// otherwise send one mail carrying the ordered batch.
///
/// A store or mail failure propagates immediately and aborts the
/// remaining rules, leaving their channels undrained; there is no
/// partial-success accounting and no retry.
pub(crate) async fn deliver_rules<S: ChannelStore>(
    store: &mut S,
    rules: &[RecipientRule],
    mailer: &dyn Mailer,
) -> ReportResult<()> {
    for rule in rules {
        deliver_channel(store, rule, mailer).await?;
    }

    Ok(())
}

/// Drain one channel and mail the batch when non-empty. Returns
/// whether a mail was sent.
pub(crate) async fn deliver_channel<S: ChannelStore>(
    store: &mut S,
    rule: &RecipientRule,
    mailer: &dyn Mailer,
) -> ReportResult<bool> {
    let events = drain_channel(store, &rule.channel).await?;

    if events.is_empty() {
        return Ok(false);
    }

    let count = events.len();

    mailer
        .send(MailRequest {
            template: REPORT_TEMPLATE.to_string(),
            from: REPORT_FROM.to_string(),
            reply_to: REPORT_REPLY_TO.to_string(),
            to: rule.to.clone(),
            data: json!({ "data": events }),
        })
        .await?;

    info!(channel = %rule.channel, events = count, "Report sent");
    Ok(true)
}
