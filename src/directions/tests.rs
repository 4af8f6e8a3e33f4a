use crate::cli::tests::fake_args;
use crate::directions::responses::RouteSummaryResponse;
use crate::http::responses::ErrorResponse;
use crate::http::tests::{test_server, test_server_with, FakeProvider, FakeReply};
use crate::map::places::{LYON, PARIS};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::future::IntoFuture;
use std::time::Duration;

fn paris_to_lyon() -> Value {
    json!({
        "start": {"lat": 48.8566, "lng": 2.3522},
        "end": {"lat": 45.7640, "lng": 4.8357}
    })
}

fn route_geojson(distance: Value, duration: Value) -> Value {
    json!({
        "type": "FeatureCollection",
        "bbox": [2.3522, 45.764, 4.8357, 48.8566],
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [],
                "summary": {"distance": distance, "duration": duration}
            },
            "geometry": {"type": "LineString", "coordinates": [[2.3522, 48.8566], [4.8357, 45.764]]}
        }]
    })
}

#[tokio::test]
async fn test_summary_is_passed_through() {
    let upstream = route_geojson(json!(465231.7), json!(16422.4));
    let provider = FakeProvider::replying(FakeReply::Route(upstream.clone()));
    let server = test_server(provider.clone());

    let response = server.post("/directions/route").json(&paris_to_lyon()).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "distance_m": 465231.7,
        "duration_s": 16422.4,
        "geojson": upstream,
    }));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_integer_summary_keeps_its_representation() {
    let upstream = route_geojson(json!(465231), json!(16422));
    let server = test_server(FakeProvider::replying(FakeReply::Route(upstream)));

    let response = server.post("/directions/route").json(&paris_to_lyon()).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("\"distance_m\":465231,"));
    assert!(body.contains("\"duration_s\":16422,"));
}

#[tokio::test]
async fn test_coordinates_are_sent_as_lng_lat() {
    let provider = FakeProvider::replying(FakeReply::Route(json!({"features": []})));
    let server = test_server(provider.clone());

    server
        .post("/directions/route")
        .json(&paris_to_lyon())
        .await
        .assert_status_ok();

    let sent = provider.directions_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].coordinates,
        vec![[2.3522, 48.8566], [4.8357, 45.7640]]
    );
    assert_eq!(
        serde_json::to_value(&sent[0]).expect("Failed to serialize the payload."),
        json!({"coordinates": [[2.3522, 48.8566], [4.8357, 45.7640]]})
    );
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_forwarded() {
    let provider = FakeProvider::replying(FakeReply::Route(json!({})));
    let server = test_server(provider.clone());

    server
        .post("/directions/route")
        .json(&json!({
            "start": {"lat": 123.0, "lng": -999.5},
            "end": {"lat": -91.0, "lng": 181.0}
        }))
        .await
        .assert_status_ok();

    assert_eq!(
        provider.directions_requests()[0].coordinates,
        vec![[-999.5, 123.0], [181.0, -91.0]]
    );
}

#[tokio::test]
async fn test_missing_credential_skips_the_provider() {
    let provider = FakeProvider::replying(FakeReply::Route(json!({})));
    let mut args = fake_args();
    args.ors_api_key = None;
    let server = test_server_with(&args, provider.clone());

    let response = server.post("/directions/route").json(&paris_to_lyon()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "Missing ORS_API_KEY"}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_empty_credential_counts_as_missing() {
    let provider = FakeProvider::replying(FakeReply::Route(json!({})));
    let mut args = fake_args();
    args.ors_api_key = Some(String::new());
    let server = test_server_with(&args, provider.clone());

    let response = server.post("/directions/route").json(&paris_to_lyon()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&ErrorResponse::new("Missing ORS_API_KEY"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failures_share_one_envelope() {
    for (status, body) in [
        (400, "{\"error\":{\"code\":2003,\"message\":\"Parameter 'coordinates' has incorrect value\"}}"),
        (403, "Access to this API has been disallowed"),
        (503, "Service Unavailable"),
    ] {
        let provider = FakeProvider::replying(FakeReply::Upstream(status, body));
        let server = test_server(provider.clone());

        let response = server.post("/directions/route").json(&paris_to_lyon()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"error": "ORS error", "details": body}));
        assert_eq!(provider.calls(), 1);
    }
}

#[tokio::test]
async fn test_unexpected_shape_leaves_summary_empty() {
    let upstream = json!({"type": "FeatureCollection", "features": [], "metadata": {"service": "routing"}});
    let server = test_server(FakeProvider::replying(FakeReply::Route(upstream.clone())));

    let response = server.post("/directions/route").json(&paris_to_lyon()).await;

    response.assert_status_ok();
    response.assert_json(&json!({"geojson": upstream}));
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_the_provider() {
    let provider = FakeProvider::replying(FakeReply::Route(json!({})));
    let server = test_server(provider.clone());

    let response = server
        .post("/directions/route")
        .json(&json!({"start": {"lat": "north"}}))
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_overlapping_requests_do_not_interfere() {
    let slow = route_geojson(json!(1.0), json!(1.0));
    let fast = route_geojson(json!(2.0), json!(2.0));
    let provider = FakeProvider::default()
        .then(FakeReply::Route(slow.clone()), Duration::from_millis(50))
        .then(FakeReply::Route(fast.clone()), Duration::ZERO);
    let server = test_server(provider.clone());

    let (first, second) = tokio::join!(
        server.post("/directions/route").json(&paris_to_lyon()).into_future(),
        server.post("/directions/route").json(&paris_to_lyon()).into_future(),
    );

    first.assert_status_ok();
    second.assert_status_ok();
    let mut summaries = [first, second]
        .iter()
        .map(|response| response.json::<RouteSummaryResponse>().geojson)
        .collect::<Vec<_>>();
    summaries.sort_by_key(|geojson| geojson.to_string());
    let mut expected = vec![slow, fast];
    expected.sort_by_key(|geojson| geojson.to_string());
    assert_eq!(summaries, expected);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_typical_routes_start_with_the_example_pair() {
    let server = test_server(FakeProvider::default());

    let response = server.get("/directions/typical-routes").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let routes = body["routes"].as_array().expect("`routes` is not an array.");
    assert_eq!(routes.len(), 5);
    assert_eq!(routes[0]["name"], "Paris → Lyon");
    assert_eq!(routes[0]["start"], json!({"lat": PARIS.lat, "lng": PARIS.lng}));
    assert_eq!(routes[0]["end"], json!({"lat": LYON.lat, "lng": LYON.lng}));
}

#[test]
fn test_summary_ignores_non_numeric_fields() {
    let geojson = json!({
        "features": [{"properties": {"summary": {"distance": "far", "duration": 12.5}}}]
    });

    let summary = RouteSummaryResponse::from_geojson(geojson.clone());

    assert_eq!(summary.distance_m, None);
    assert_eq!(summary.duration_s.and_then(|n| n.as_f64()), Some(12.5));
    assert_eq!(summary.geojson, geojson);
}
