use crate::map::models::LatLng;
use crate::ors::error::OrsError;
use crate::ors::models::{DirectionsRequest, GeocodeResponse};
use crate::ors::provider::IRoutingProvider;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

const DIRECTIONS_PATH: &str = "v2/directions/driving-car/geojson";
const GEOCODE_PATH: &str = "geocode/search";
pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(30);

/// openrouteservice over HTTP. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http_client: Client,
    directions_url: Url,
    geocode_url: Url,
    geocode_timeout: Duration,
}

impl OrsClient {
    pub fn new(base_url: Url) -> Result<Self, url::ParseError> {
        let base_url = with_trailing_slash(base_url);
        Ok(Self {
            http_client: Client::new(),
            directions_url: base_url.join(DIRECTIONS_PATH)?,
            geocode_url: base_url.join(GEOCODE_PATH)?,
            geocode_timeout: GEOCODE_TIMEOUT,
        })
    }

    pub fn with_geocode_timeout(mut self, timeout: Duration) -> Self {
        self.geocode_timeout = timeout;
        self
    }
}

#[async_trait]
impl IRoutingProvider for OrsClient {
    async fn directions(
        &self,
        api_key: &str,
        request: &DirectionsRequest,
    ) -> Result<serde_json::Value, OrsError> {
        tracing::debug!(
            task = "ors_directions",
            url = %self.directions_url,
            coordinates = ?request.coordinates,
        );
        let response = self
            .http_client
            .post(self.directions_url.clone())
            .header(AUTHORIZATION, api_key)
            .json(request)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    async fn geocode(&self, api_key: &str, text: &str) -> Result<Option<LatLng>, OrsError> {
        // The key travels in the query string here, so the URL must never reach logs.
        tracing::debug!(task = "ors_geocode", url = %self.geocode_url, text);
        let response = self
            .http_client
            .get(self.geocode_url.clone())
            .query(&[("api_key", api_key), ("text", text), ("size", "1")])
            .timeout(self.geocode_timeout)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        let geocoded: GeocodeResponse = response.json().await?;
        Ok(geocoded
            .features
            .first()
            .map(|feature| LatLng::from_lng_lat(feature.geometry.coordinates)))
    }
}

/// Like `Response::error_for_status`, but keeps the body the provider sent along.
async fn error_for_status(response: Response) -> Result<Response, OrsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(OrsError::Upstream { status, body })
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
