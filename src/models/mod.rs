//! This module defines the data structures for publisher and client
//! configuration.

mod publisher;
mod sns;

pub use publisher::PublisherConfig;
pub use sns::{SnsConfig, SnsCredentials};
