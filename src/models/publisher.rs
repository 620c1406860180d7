use serde::{Deserialize, Serialize};

/// Configuration for the SNS event publisher.
///
/// Set once at construction and owned by the publisher for its lifetime;
/// there is no runtime reconfiguration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct PublisherConfig {
    /// Prefix prepended to the channel name when building the target topic
    /// ARN, e.g. `arn:aws:sns:us-east-1:123456789012:`.
    pub topic_arn_prefix: String,

    /// Suffix appended after the channel name, e.g. `-production`.
    #[serde(default)]
    pub topic_suffix: String,

    /// Treat every target topic as FIFO, regardless of the channel name.
    #[serde(default)]
    pub force_fifo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PublisherConfig =
            serde_json::from_str(r#"{"topic_arn_prefix": "arn:aws:sns:eu-west-1:123:"}"#).unwrap();

        assert_eq!(config.topic_arn_prefix, "arn:aws:sns:eu-west-1:123:");
        assert_eq!(config.topic_suffix, "");
        assert!(!config.force_fifo);
    }

    #[test]
    fn test_deserialize_full() {
        let config: PublisherConfig = serde_json::from_str(
            r#"{"topic_arn_prefix": "arn:aws:sns:eu-west-1:123:", "topic_suffix": "-staging", "force_fifo": true}"#,
        )
        .unwrap();

        assert_eq!(config.topic_suffix, "-staging");
        assert!(config.force_fifo);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<PublisherConfig>(
            r#"{"topic_arn_prefix": "", "topic": "orders"}"#,
        );
        assert!(result.is_err());
    }
}
