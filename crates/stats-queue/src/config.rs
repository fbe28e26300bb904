//! Queue configuration.

use serde::{Deserialize, Deserializer};

/// Connection parameters and channel fan-out for the Redis store.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL.
    pub url: String,

    /// Channels every push appends to, in order. Accepts a single
    /// string or an array in configuration.
    #[serde(default, deserialize_with = "string_or_seq")]
    pub channels: Vec<String>,
}

impl RedisConfig {
    /// The channel a drain falls back to when none is named.
    pub fn default_channel(&self) -> Option<&str> {
        self.channels.first().map(String::as_str)
    }
}

/// Top-level queue configuration.
///
/// A missing `redis` section turns push and drain into logged no-ops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueConfig {
    pub redis: Option<RedisConfig>,
}

/// Deserialize a single string or a sequence of strings into a
/// `Vec<String>`.
pub fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
