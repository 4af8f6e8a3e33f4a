use crate::app_context::AppContext;
use crate::geocode::requests::GeocodeQueryParams;
use crate::geocode::responses::PlaceResponse;
use crate::geocode::services::GeocodeHttpHandler;
use crate::http::responses::ErrorResponse;
use crate::ors::provider::IRoutingProvider;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;

pub async fn search<RP>(
    State(app_context): State<AppContext<RP>>,
    Query(query_params): Query<GeocodeQueryParams>,
) -> Result<Json<PlaceResponse>, (StatusCode, Json<ErrorResponse>)>
where
    RP: IRoutingProvider,
{
    GeocodeHttpHandler::new(app_context)
        .search(&query_params.text)
        .await
        .map(Json)
        .map_err(|body| (StatusCode::NOT_FOUND, Json(body)))
}
