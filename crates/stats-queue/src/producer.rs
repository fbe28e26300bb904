//! Producer: append stats events to configured channels.

use crate::config::QueueConfig;
use crate::error::QueueResult;
use crate::store::{ChannelStore, RedisStore};
use serde::Serialize;
use tracing::{debug, warn};

/// Serialize an event once and append it to every channel in order.
///
/// Fan-out is sequential and not transactional: on a failure at
/// channel `k`, channels before `k` keep the event and channels after
/// `k` are never attempted. The error propagates and the caller must
/// treat the push as partially applied.
pub async fn push_to<S, T>(store: &mut S, channels: &[String], event: &T) -> QueueResult<Vec<i64>>
where
    S: ChannelStore,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string(event)?;
    let mut lengths = Vec::with_capacity(channels.len());

    for channel in channels {
        lengths.push(store.append(channel, &payload).await?);
    }

    Ok(lengths)
}

/// Append a stats event to every configured channel.
///
/// Opens a store connection scoped to this call. Returns the
/// post-append length of each channel in configuration order, or
/// `None` when Redis is not configured (logged no-op, not an error).
pub async fn push<T>(config: &QueueConfig, event: &T) -> QueueResult<Option<Vec<i64>>>
where
    T: Serialize + ?Sized,
{
    let Some(redis) = &config.redis else {
        warn!("Redis is not configured, stats not pushed");
        return Ok(None);
    };

    let mut store = RedisStore::connect(redis).await?;
    let lengths = push_to(&mut store, &redis.channels, event).await?;

    debug!(channels = redis.channels.len(), "Pushed stats event");
    Ok(Some(lengths))
}
