//! Drain semantics: clearing, defaults, malformed entries.

use super::harness::event;
use crate::config::{QueueConfig, RedisConfig};
use crate::drainer::{drain, drain_channel};
use crate::error::QueueError;
use crate::memory::MemoryStore;
use crate::producer::push_to;
use crate::store::ChannelStore;

#[tokio::test]
async fn second_drain_is_empty() {
    let mut store = MemoryStore::new();
    let channels = vec!["daily".to_string()];

    for i in 0..3 {
        push_to(&mut store, &channels, &event("x", i)).await.unwrap();
    }

    assert_eq!(drain_channel(&mut store, "daily").await.unwrap().len(), 3);
    assert!(drain_channel(&mut store, "daily").await.unwrap().is_empty());
    assert_eq!(store.channel_len("daily"), 0);
}

#[tokio::test]
async fn malformed_entry_aborts_drain_and_keeps_channel() {
    let mut store = MemoryStore::new();
    store.append("daily", r#"{"metric":"x"}"#).await.unwrap();
    store.append("daily", "not json").await.unwrap();

    let result = drain_channel(&mut store, "daily").await;
    assert!(matches!(result, Err(QueueError::Json(_))));

    // Nothing was cleared; the batch is still pending.
    assert_eq!(store.channel_len("daily"), 2);
}

#[tokio::test]
async fn drain_without_channel_requires_a_configured_default() {
    let config = QueueConfig {
        redis: Some(RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            channels: Vec::new(),
        }),
    };

    // Fails before any connection is attempted.
    let result = drain(&config, None).await;
    assert!(matches!(result, Err(QueueError::Config(_))));
}
