use crate::app_context::AppContext;
use crate::geocode::responses::{PlaceResponse, PlaceSource};
use crate::http::responses::ErrorResponse;
use crate::map::models::LatLng;
use crate::map::places;
use crate::ors::provider::IRoutingProvider;

pub const LOCATION_NOT_FOUND: &str = "Location not found";

pub struct GeocodeHttpHandler<RP: IRoutingProvider> {
    app_context: AppContext<RP>,
}

impl<RP> GeocodeHttpHandler<RP>
where
    RP: IRoutingProvider,
{
    pub fn new(app_context: AppContext<RP>) -> Self {
        Self { app_context }
    }

    /// Asks the provider once when a credential is configured, then falls back to the
    /// built-in city table.
    pub async fn search(&self, text: &str) -> Result<PlaceResponse, ErrorResponse> {
        let mut provider_error = None;
        if let Some(api_key) = self.app_context.ors_api_key.as_deref() {
            match self.app_context.provider.geocode(api_key, text).await {
                Ok(Some(location)) => return Ok(place(location, PlaceSource::Provider)),
                Ok(None) => {
                    tracing::debug!(task = "geocode", text, "Provider has no match.");
                }
                Err(err) => {
                    tracing::warn!(task = "geocode", error = %err, "Geocoding provider failed.");
                    provider_error = Some(err.details());
                }
            }
        }
        match places::known_city(text) {
            Some(location) => Ok(place(location, PlaceSource::Builtin)),
            None => Err(ErrorResponse {
                error: LOCATION_NOT_FOUND.to_string(),
                details: provider_error,
            }),
        }
    }
}

fn place(location: LatLng, source: PlaceSource) -> PlaceResponse {
    PlaceResponse {
        lat: location.lat,
        lng: location.lng,
        source,
    }
}
