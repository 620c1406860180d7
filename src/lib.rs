#![warn(missing_docs)]
//! An AWS SNS backend for event-broadcasting frameworks: maps broadcast
//! channels to SNS topics, with standard and FIFO delivery semantics.

pub mod broadcaster;
pub mod client;
pub mod models;
