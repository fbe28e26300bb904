//! Drainer: read a channel's full contents and clear it.

use crate::config::QueueConfig;
use crate::error::{QueueError, QueueResult};
use crate::store::{ChannelStore, RedisStore};
use tracing::{debug, warn};

/// A stats event as stored: opaque structured data.
pub type StatsEvent = serde_json::Value;

/// Drain one channel on the given store.
///
/// Reads the channel length, then the inclusive range `[0, len]`. The
/// bound comes from the earlier length read, so an event appended in
/// between may or may not be included; either way the final clear
/// removes the whole channel. That non-atomic window is an accepted
/// hazard of this design, not a guarantee.
///
/// Every entry must parse; one malformed entry aborts the drain and
/// leaves the channel untouched.
pub async fn drain_channel<S: ChannelStore>(
    store: &mut S,
    channel: &str,
) -> QueueResult<Vec<StatsEvent>> {
    let length = store.len(channel).await?;
    let entries = store.range(channel, 0, length).await?;

    let events = entries
        .iter()
        .map(|entry| serde_json::from_str(entry))
        .collect::<Result<Vec<StatsEvent>, _>>()?;

    store.clear(channel).await?;

    debug!(channel = %channel, drained = events.len(), "Drained channel");
    Ok(events)
}

/// Drain a channel, defaulting to the first configured one.
///
/// Opens a store connection scoped to this call. Returns `None` when
/// Redis is not configured (logged no-op, not an error). Naming no
/// channel with no default configured is a configuration error.
pub async fn drain(
    config: &QueueConfig,
    channel: Option<&str>,
) -> QueueResult<Option<Vec<StatsEvent>>> {
    let Some(redis) = &config.redis else {
        warn!("Redis is not configured, stats not drained");
        return Ok(None);
    };

    let channel = match channel.or_else(|| redis.default_channel()) {
        Some(channel) => channel,
        None => {
            return Err(QueueError::Config(
                "no channel named and no default channel configured".to_string(),
            ))
        }
    };

    let mut store = RedisStore::connect(redis).await?;
    let events = drain_channel(&mut store, channel).await?;

    Ok(Some(events))
}
