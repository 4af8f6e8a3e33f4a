use crate::app_context::AppContext;
use crate::cli::Args;
use crate::ors::provider::IRoutingProvider;
use crate::{directions, geocode, health, http::cors, http::middleware, pages};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

const MAX_DIRECTIONS_BODY_BYTES: usize = 16 * 1024;

pub fn new<RP>(args: &Args, app_context: AppContext<RP>) -> Router
where
    RP: IRoutingProvider,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let directions_routes = Router::new()
        .route("/route", post(directions::handlers::route::<RP>))
        .route("/typical-routes", get(directions::handlers::typical_routes))
        .layer(DefaultBodyLimit::max(MAX_DIRECTIONS_BODY_BYTES));
    let geocode_routes = Router::new().route("/search", get(geocode::handlers::search::<RP>));

    Router::new()
        .route("/", get(pages::handlers::analysis_page::<RP>))
        .nest("/health", health_routes)
        .nest("/directions", directions_routes)
        .nest("/geocode", geocode_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
