use super::{PublishRequest, TopicClientError};

/// A trait representing a topic-publishing client that can deliver one
/// publish request to a messaging backend.
#[async_trait::async_trait]
pub trait TopicClient: Send + Sync {
    /// Publish the given request to its target topic.
    async fn publish(&self, request: &PublishRequest) -> Result<(), TopicClientError>;
}
