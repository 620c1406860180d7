use serde::{Deserialize, Serialize};

/// Configuration for constructing the AWS SNS client.
///
/// Every field is optional; anything left unset is resolved through the
/// default AWS provider chain (environment, profile, instance role).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SnsConfig {
    /// AWS region of the target topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Custom endpoint URL, e.g. a LocalStack instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Optional static credentials for the SNS client.
    pub credentials: Option<SnsCredentials>,
}

/// Static credentials for AWS authentication.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnsCredentials {
    /// The AWS access key id.
    pub access_key_id: String,

    /// The AWS secret access key.
    pub secret_access_key: String,
}
