use crate::app_context::AppContext;
use crate::directions::requests::RouteRequest;
use crate::directions::responses::{RouteSummaryResponse, TypicalRoutesResponse};
use crate::directions::services::DirectionsHttpHandler;
use crate::http::responses::ErrorResponse;
use crate::map::places;
use crate::ors::provider::IRoutingProvider;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

pub async fn route<RP>(
    State(app_context): State<AppContext<RP>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteSummaryResponse>, (StatusCode, Json<ErrorResponse>)>
where
    RP: IRoutingProvider,
{
    DirectionsHttpHandler::new(app_context)
        .route(request)
        .await
        .map(Json)
        .map_err(|body| (StatusCode::INTERNAL_SERVER_ERROR, Json(body)))
}

#[axum::debug_handler]
pub async fn typical_routes() -> Json<TypicalRoutesResponse> {
    Json(TypicalRoutesResponse {
        routes: places::typical_routes(),
    })
}
