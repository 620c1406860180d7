use serde_json::{Map, Value};

use super::BroadcastError;

/// A trait representing the broadcaster capability expected by the host
/// event-broadcasting framework.
///
/// The framework stays decoupled from any messaging backend: it routes
/// events to channels upstream and hands the result to whichever
/// `Broadcaster` it was wired with.
#[async_trait::async_trait]
pub trait Broadcaster: Send + Sync {
    /// Broadcasts the given event and payload to the listed channels.
    async fn broadcast(
        &self,
        channels: &[String],
        event: &str,
        payload: &Map<String, Value>,
    ) -> Result<(), BroadcastError>;

    /// Authorizes an incoming subscriber connection request. The request is
    /// opaque to the broadcaster.
    fn authorize_connection(&self, request: &Value) -> bool;

    /// Validates the result of an authentication handshake. Both arguments
    /// are opaque to the broadcaster.
    fn validate_auth_response(&self, request: &Value, result: &Value) -> bool;
}
