//! Multi-channel fan-out behavior.

use super::harness::{event, FailingStore};
use crate::drainer::drain_channel;
use crate::error::QueueError;
use crate::memory::MemoryStore;
use crate::producer::push_to;

#[tokio::test]
async fn push_appends_one_copy_per_channel() {
    let mut store = MemoryStore::new();
    let channels = vec!["daily".to_string(), "weekly".to_string()];

    let lengths = push_to(&mut store, &channels, &event("x", 1)).await.unwrap();
    assert_eq!(lengths, vec![1, 1]);

    let daily = drain_channel(&mut store, "daily").await.unwrap();
    let weekly = drain_channel(&mut store, "weekly").await.unwrap();
    assert_eq!(daily, vec![event("x", 1)]);
    assert_eq!(weekly, vec![event("x", 1)]);
}

#[tokio::test]
async fn failed_append_does_not_roll_back_earlier_channels() {
    let mut store = FailingStore::new("weekly");
    let channels = vec![
        "daily".to_string(),
        "weekly".to_string(),
        "monthly".to_string(),
    ];

    let result = push_to(&mut store, &channels, &event("x", 1)).await;
    assert!(matches!(result, Err(QueueError::Store(_))));

    // First channel keeps the event, the third was never attempted.
    assert_eq!(store.inner.channel_len("daily"), 1);
    assert_eq!(store.inner.channel_len("weekly"), 0);
    assert_eq!(store.inner.channel_len("monthly"), 0);
}
