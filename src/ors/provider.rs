use crate::map::models::LatLng;
use crate::ors::error::OrsError;
use crate::ors::models::DirectionsRequest;
use async_trait::async_trait;

/// Whatever answers routing and geocoding questions for the proxy.
///
/// Implementations make at most one outbound call per method invocation.
#[async_trait]
pub trait IRoutingProvider: Clone + Send + Sync + 'static {
    /// Returns the provider's GeoJSON route payload untouched.
    async fn directions(
        &self,
        api_key: &str,
        request: &DirectionsRequest,
    ) -> Result<serde_json::Value, OrsError>;

    /// Returns the best match for `text`, or `None` when the provider knows nothing about it.
    async fn geocode(&self, api_key: &str, text: &str) -> Result<Option<LatLng>, OrsError>;
}
