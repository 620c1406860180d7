/// A structured publish request handed to a topic client.
///
/// Built fresh for every broadcast and discarded once submitted; field names
/// mirror the SNS `Publish` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// The ARN of the topic to publish to.
    pub topic_arn: String,

    /// The message subject; carries the broadcast event name.
    pub subject: String,

    /// The JSON-encoded message body.
    pub message: String,

    /// Content hash collapsing retried publishes. Set for FIFO topics only.
    pub deduplication_id: Option<String>,

    /// Ordering partition key. Set for FIFO topics only.
    pub group_id: Option<String>,
}
