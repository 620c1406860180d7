use std::sync::Arc;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::{
    broadcaster::{BroadcastError, Broadcaster},
    client::{PublishRequest, TopicClient},
    models::PublisherConfig,
};

/// Payload key reserved by the host framework for the originating
/// connection's identifier; never relayed to subscribers.
const SOCKET_KEY: &str = "socket";

/// Trailing channel-name segment marking a FIFO topic.
const FIFO_SEGMENT: &str = "fifo";

/// An SNS event publisher.
///
/// Implements the `Broadcaster` contract over an injected `TopicClient`:
/// every broadcast builds exactly one `PublishRequest` from the first
/// destination channel and submits it once, with no retry and no local state.
pub struct EventPublisher {
    /// The injected topic client; long-lived and externally owned.
    client: Arc<dyn TopicClient>,

    /// Immutable topic-routing configuration.
    config: PublisherConfig,
}

impl EventPublisher {
    /// Creates a new `EventPublisher` with the given topic client and
    /// configuration.
    pub fn new(client: Arc<dyn TopicClient>, config: PublisherConfig) -> Self {
        Self { client, config }
    }

    /// Builds the target topic ARN for a channel: prefix + channel + suffix.
    ///
    /// Plain concatenation; keeping channel names ARN-safe is the caller's
    /// responsibility.
    fn topic_arn(&self, channel: &str) -> String {
        format!("{}{}{}", self.config.topic_arn_prefix, channel, self.config.topic_suffix)
    }

    /// Whether the channel names a FIFO topic: its final `.`-separated
    /// segment is the literal `fifo` (case-sensitive).
    fn is_fifo_channel(channel: &str) -> bool {
        channel.split('.').next_back() == Some(FIFO_SEGMENT)
    }

    /// Content hash collapsing retried publishes of the same event.
    ///
    /// Depends only on the serialized payload and the event name, never on
    /// call order or wall-clock time.
    fn deduplication_id(payload_json: &str, event: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(payload_json.as_bytes());
        hasher.update(event.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Ordering partition key for a channel's FIFO topic.
    fn group_id(channel: &str) -> String {
        format!("group-{channel}")
    }

    /// Builds the publish request for one broadcast call.
    ///
    /// The first channel drives topic targeting and grouping; any further
    /// channels are ignored. The reserved `socket` key is stripped from the
    /// message body but still participates in the deduplication hash.
    fn publish_request(
        &self,
        channels: &[String],
        event: &str,
        payload: &Map<String, Value>,
    ) -> Result<PublishRequest, BroadcastError> {
        let channel = channels.first().ok_or(BroadcastError::MissingChannel)?;

        let mut body = payload.clone();
        body.remove(SOCKET_KEY);

        let mut request = PublishRequest {
            topic_arn: self.topic_arn(channel),
            subject: event.to_string(),
            message: serde_json::to_string(&body)?,
            deduplication_id: None,
            group_id: None,
        };

        if self.config.force_fifo || Self::is_fifo_channel(channel) {
            let payload_json = serde_json::to_string(payload)?;
            request.deduplication_id = Some(Self::deduplication_id(&payload_json, event));
            request.group_id = Some(Self::group_id(channel));
        }

        Ok(request)
    }
}

#[async_trait::async_trait]
impl Broadcaster for EventPublisher {
    async fn broadcast(
        &self,
        channels: &[String],
        event: &str,
        payload: &Map<String, Value>,
    ) -> Result<(), BroadcastError> {
        let request = self.publish_request(channels, event, payload)?;

        tracing::debug!(topic_arn = %request.topic_arn, event = %event, "Broadcasting event.");

        self.client.publish(&request).await?;

        Ok(())
    }

    /// Always grants access: this broadcaster performs no channel-level
    /// authorization.
    fn authorize_connection(&self, _request: &Value) -> bool {
        true
    }

    /// Always succeeds: no authentication handshake is implemented.
    fn validate_auth_response(&self, _request: &Value, _result: &Value) -> bool {
        true
    }
}
