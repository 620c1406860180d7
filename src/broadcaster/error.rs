//! Error types for the broadcaster.

use thiserror::Error;

use crate::client::TopicClientError;

/// Defines the possible errors that can occur while broadcasting an event.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// No destination channel was supplied with the broadcast. Raised locally
    /// before any network call; topic routing is driven by the first channel.
    #[error("Broadcast requires at least one channel")]
    MissingChannel,

    /// The payload could not be rendered to its JSON wire form. Raised
    /// locally before any network call; never retried.
    #[error("Failed to serialize broadcast payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An opaque failure surfaced by the topic client, propagated unchanged.
    #[error(transparent)]
    Publish(#[from] TopicClientError),
}
