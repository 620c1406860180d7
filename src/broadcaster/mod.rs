//! # SNS Broadcaster
//!
//! This module implements the broadcaster contract of the host
//! event-broadcasting framework on top of AWS SNS topics.
//!
//! ## Core Components
//!
//! - **`Broadcaster` Trait**: the capability set the host framework expects:
//!   broadcasting an event plus the two connection-auth operations.
//! - **`EventPublisher`**: the one concrete broadcaster. It maps the first
//!   destination channel to a topic ARN, strips the reserved `socket` key
//!   from the payload, selects standard or FIFO delivery, and submits exactly
//!   one publish request to the injected topic client.
//!
//! ## Workflow
//!
//! 1. The host wires an `EventPublisher` at startup from a `PublisherConfig`
//!    and a shared `TopicClient`.
//! 2. Per event, the framework calls `broadcast` with the destination
//!    channels, the event name, and the JSON payload.
//! 3. The publisher builds one `PublishRequest` and hands it to the client;
//!    any client failure propagates unchanged to the caller.
//!
//! Delivery mode is FIFO when the publisher is configured with `force_fifo`
//! or when the first channel's name ends in the `.fifo` segment; FIFO
//! publishes carry a content-derived deduplication id and a per-channel
//! group id. The two auth operations unconditionally grant access; the host
//! framework relies on this permissive behavior.

mod error;
mod publisher;
mod traits;

pub use error::BroadcastError;
pub use publisher::EventPublisher;
pub use traits::Broadcaster;
