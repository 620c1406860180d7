//! Topic-publishing clients consumed by the broadcaster.
//!
//! The `TopicClient` trait is the seam between message construction and the
//! messaging backend; `SnsTopicClient` is the AWS SNS implementation.

mod error;
mod request;
mod sns;
mod traits;

pub use error::TopicClientError;
pub use request::PublishRequest;
pub use sns::SnsTopicClient;
pub use traits::TopicClient;
