use aws_config::BehaviorVersion;
use aws_sdk_sns::config::{Credentials, Region};

use crate::{
    client::{PublishRequest, TopicClient, TopicClientError},
    models::SnsConfig,
};

/// An SNS-backed topic client.
pub struct SnsTopicClient {
    /// The SNS SDK client.
    client: aws_sdk_sns::Client,
}

impl SnsTopicClient {
    /// Creates a new `SnsTopicClient` over an externally constructed SDK
    /// client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Creates a new `SnsTopicClient` from the given configuration.
    ///
    /// Anything left unset in the configuration is resolved through the
    /// default AWS provider chain.
    pub async fn from_config(config: &SnsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        let shared_config = loader.load().await;
        let mut builder = aws_sdk_sns::config::Builder::from(&shared_config);

        if let Some(creds) = &config.credentials {
            builder = builder.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                None,
                None,
                "sns-broadcaster-static",
            ));
        }

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        Self { client: aws_sdk_sns::Client::from_conf(builder.build()) }
    }
}

#[async_trait::async_trait]
impl TopicClient for SnsTopicClient {
    async fn publish(&self, request: &PublishRequest) -> Result<(), TopicClientError> {
        let mut publish = self
            .client
            .publish()
            .topic_arn(&request.topic_arn)
            .subject(&request.subject)
            .message(&request.message);

        if let Some(deduplication_id) = &request.deduplication_id {
            publish = publish.message_deduplication_id(deduplication_id);
        }
        if let Some(group_id) = &request.group_id {
            publish = publish.message_group_id(group_id);
        }

        let output = publish.send().await?;
        tracing::debug!(
            topic_arn = %request.topic_arn,
            message_id = ?output.message_id(),
            "Published message to SNS."
        );

        Ok(())
    }
}
