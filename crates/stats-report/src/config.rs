//! Report configuration.

use serde::Deserialize;
use stats_queue::config::string_or_seq;
use stats_queue::QueueConfig;

/// SMTP parameters for the mail collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,

    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Optional SMTP credentials.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_smtp_port() -> u16 {
    587
}

/// One channel-to-recipients routing rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipientRule {
    /// Channel to drain.
    pub channel: String,

    /// Recipient addresses. Accepts a single string or an array in
    /// configuration.
    #[serde(deserialize_with = "string_or_seq")]
    pub to: Vec<String>,
}

/// Configuration for a report run.
///
/// Missing `redis`, `mail` or `send_to` sections each turn the run
/// into a logged no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(flatten)]
    pub queue: QueueConfig,

    pub mail: Option<MailConfig>,

    /// Routing rules, processed in declaration order.
    pub send_to: Option<Vec<RecipientRule>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipients_accept_a_single_string() {
        let rule: RecipientRule =
            serde_json::from_str(r#"{"channel":"daily","to":"a@x.com"}"#).unwrap();

        assert_eq!(rule.channel, "daily");
        assert_eq!(rule.to, vec!["a@x.com"]);
    }

    #[test]
    fn recipients_accept_an_array() {
        let rule: RecipientRule =
            serde_json::from_str(r#"{"channel":"daily","to":["a@x.com","b@x.com"]}"#).unwrap();

        assert_eq!(rule.to, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn full_config_parses_with_flattened_queue_section() {
        let config: ReportConfig = serde_json::from_str(
            r#"{
                "redis": {"url": "redis://localhost", "channels": ["daily"]},
                "mail": {"smtp_host": "smtp.example.com"},
                "send_to": [{"channel": "daily", "to": "a@x.com"}]
            }"#,
        )
        .unwrap();

        assert!(config.queue.redis.is_some());
        assert_eq!(config.mail.unwrap().smtp_port, 587);
        assert_eq!(config.send_to.unwrap().len(), 1);
    }

    #[test]
    fn empty_config_has_every_section_absent() {
        let config: ReportConfig = serde_json::from_str("{}").unwrap();

        assert!(config.queue.redis.is_none());
        assert!(config.mail.is_none());
        assert!(config.send_to.is_none());
    }
}
