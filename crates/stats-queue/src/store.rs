//! Channel store interface and its Redis implementation.

use crate::config::RedisConfig;
use crate::error::QueueResult;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tracing::debug;

/// The narrow interface the queue layer needs from a store: ordered
/// per-channel lists with append, length, range read and clear.
#[async_trait]
pub trait ChannelStore: Send {
    /// Append a serialized event, returning the post-append length.
    async fn append(&mut self, channel: &str, payload: &str) -> QueueResult<i64>;

    /// Current length of the channel.
    async fn len(&mut self, channel: &str) -> QueueResult<i64>;

    /// Read the inclusive range `[start, stop]` of the channel.
    async fn range(&mut self, channel: &str, start: i64, stop: i64) -> QueueResult<Vec<String>>;

    /// Remove the channel and everything in it.
    async fn clear(&mut self, channel: &str) -> QueueResult<()>;
}

/// Redis-backed channel store.
///
/// One `RedisStore` is one connection, scoped to a single push or
/// drain call and released when dropped. Connections are never pooled
/// or shared across calls.
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to Redis.
    pub async fn connect(config: &RedisConfig) -> QueueResult<Self> {
        let client = Client::open(config.url.as_str())?;
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl ChannelStore for RedisStore {
    async fn append(&mut self, channel: &str, payload: &str) -> QueueResult<i64> {
        let length: i64 = self.conn.rpush(channel, payload).await?;
        debug!(channel = %channel, length = length, "Appended event");
        Ok(length)
    }

    async fn len(&mut self, channel: &str) -> QueueResult<i64> {
        Ok(self.conn.llen(channel).await?)
    }

    async fn range(&mut self, channel: &str, start: i64, stop: i64) -> QueueResult<Vec<String>> {
        Ok(self
            .conn
            .lrange(channel, start as isize, stop as isize)
            .await?)
    }

    async fn clear(&mut self, channel: &str) -> QueueResult<()> {
        // DEL, not LTRIM: the channel must be unambiguously empty
        // afterwards regardless of how many entries it held.
        let deleted: i64 = self.conn.del(channel).await?;
        debug!(channel = %channel, deleted = deleted, "Cleared channel");
        Ok(())
    }
}
