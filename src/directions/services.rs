use crate::app_context::AppContext;
use crate::directions::requests::RouteRequest;
use crate::directions::responses::RouteSummaryResponse;
use crate::http::responses::ErrorResponse;
use crate::ors::models::DirectionsRequest;
use crate::ors::provider::IRoutingProvider;
use crate::ors::ORS_API_KEY;

pub const ORS_ERROR: &str = "ORS error";

pub struct DirectionsHttpHandler<RP: IRoutingProvider> {
    app_context: AppContext<RP>,
}

impl<RP> DirectionsHttpHandler<RP>
where
    RP: IRoutingProvider,
{
    pub fn new(app_context: AppContext<RP>) -> Self {
        Self { app_context }
    }

    /// Exactly one provider call when a credential is configured, none otherwise.
    pub async fn route(&self, request: RouteRequest) -> Result<RouteSummaryResponse, ErrorResponse> {
        let Some(api_key) = self.app_context.ors_api_key.as_deref() else {
            tracing::warn!(task = "directions", "Refusing to route: `{}` is not set.", ORS_API_KEY);
            return Err(ErrorResponse::new(&format!("Missing {}", ORS_API_KEY)));
        };
        let payload = DirectionsRequest::between(request.start, request.end);
        match self.app_context.provider.directions(api_key, &payload).await {
            Ok(geojson) => Ok(RouteSummaryResponse::from_geojson(geojson)),
            Err(err) => {
                tracing::warn!(task = "directions", error = %err, "Directions provider failed.");
                Err(ErrorResponse::with_details(ORS_ERROR, err.details()))
            }
        }
    }
}
