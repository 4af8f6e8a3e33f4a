use crate::cli::{Args, PageVariant};
use crate::directions::requests::RouteRequest;
use crate::map::places;

pub mod handlers;

pub const ROUTE_ENDPOINT: &str = "/directions/route";

const ANALYSIS_HTML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/static/analysis.html"
));
const DASHBOARD_LINK_HTML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/static/dashboard_link.html"
));

/// Builds the document served at `/`. Runs once at startup.
pub fn render(args: &Args) -> String {
    let page = match args.page_variant {
        PageVariant::Interactive => render_interactive(),
        PageVariant::DashboardLink => DASHBOARD_LINK_HTML
            .replace("__DASHBOARD_URL__", &escape_attribute(args.dashboard_url.as_str())),
    };
    tracing::info!(page_variant = ?args.page_variant, "Rendered the analysis page.");
    page
}

fn render_interactive() -> String {
    let example = places::example_route();
    let request = RouteRequest {
        start: example.start,
        end: example.end,
    };
    let request_json =
        serde_json::to_string(&request).expect("Failed to serialize the example route request.");
    ANALYSIS_HTML
        .replace("__EXAMPLE_NAME__", &example.name)
        .replace("__ROUTE_ENDPOINT__", ROUTE_ENDPOINT)
        .replace("__EXAMPLE_REQUEST__", &request_json)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
