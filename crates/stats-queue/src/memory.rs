//! In-memory channel store.
//!
//! Mirrors the Redis list semantics the queue layer relies on. Drives
//! the test suites and works as a store for single-process setups
//! where Redis is not deployed.

use crate::error::QueueResult;
use crate::store::ChannelStore;
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory [`ChannelStore`] over per-channel vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    channels: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently buffered in a channel.
    pub fn channel_len(&self, channel: &str) -> usize {
        self.channels.get(channel).map_or(0, Vec::len)
    }
}

#[async_trait]
impl ChannelStore for MemoryStore {
    async fn append(&mut self, channel: &str, payload: &str) -> QueueResult<i64> {
        let entries = self.channels.entry(channel.to_string()).or_default();
        entries.push(payload.to_string());
        Ok(entries.len() as i64)
    }

    async fn len(&mut self, channel: &str) -> QueueResult<i64> {
        Ok(self.channel_len(channel) as i64)
    }

    async fn range(&mut self, channel: &str, start: i64, stop: i64) -> QueueResult<Vec<String>> {
        let entries = match self.channels.get(channel) {
            Some(entries) => entries,
            None => return Ok(Vec::new()),
        };

        // Inclusive bounds clamped to the list. Negative from-the-end
        // indices are not supported; the queue layer only reads from 0.
        let len = entries.len() as i64;
        let start = start.clamp(0, len) as usize;
        let stop = stop.min(len - 1);
        if stop < start as i64 {
            return Ok(Vec::new());
        }

        Ok(entries[start..=stop as usize].to_vec())
    }

    async fn clear(&mut self, channel: &str) -> QueueResult<()> {
        self.channels.remove(channel);
        Ok(())
    }
}
