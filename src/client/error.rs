use aws_sdk_sns::{error::SdkError, operation::publish::PublishError};

/// Error types for topic clients.
#[derive(Debug, thiserror::Error)]
pub enum TopicClientError {
    /// SNS publish error (network failure, access denied, topic not found,
    /// throttling). Never interpreted here; retry policy belongs to the
    /// caller or the backend.
    #[error("SNS publish error: {0}")]
    Sns(#[from] SdkError<PublishError>),
}
