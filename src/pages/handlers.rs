use crate::app_context::AppContext;
use crate::ors::provider::IRoutingProvider;
use axum::extract::State;
use axum::response::Html;

pub async fn analysis_page<RP>(State(app_context): State<AppContext<RP>>) -> Html<String>
where
    RP: IRoutingProvider,
{
    Html(app_context.analysis_page.to_string())
}
