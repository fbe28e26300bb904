//! Redis-backed FIFO channels for buffering stats events.
//!
//! Producers append serialized stats events to named channels; the
//! drainer reads a channel's full contents back in append order and
//! clears it. Channels are plain Redis lists, so durability and
//! cross-process safety are Redis's concern.
//!
//! # Core Invariants
//!
//! 1. **FIFO**: a drain returns events in push order
//! 2. **At-least-once**: the drain reads then clears without a
//!    transaction; an event appended in between may be returned by a
//!    later drain or swallowed by the clear
//! 3. **Scoped connections**: every push and drain opens its own store
//!    connection and releases it on every exit path
//! 4. **No retry**: store failures propagate to the caller

pub mod config;
pub mod drainer;
pub mod error;
pub mod memory;
pub mod producer;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::{QueueConfig, RedisConfig};
pub use drainer::{drain, drain_channel, StatsEvent};
pub use error::{QueueError, QueueResult};
pub use memory::MemoryStore;
pub use producer::{push, push_to};
pub use store::{ChannelStore, RedisStore};
