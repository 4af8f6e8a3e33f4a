use crate::health::responses::HealthCheckResponse;
use crate::http::tests::{test_server, FakeProvider};

#[tokio::test]
async fn test_health_check() {
    let server = test_server(FakeProvider::default());

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse { error: false });
}

#[tokio::test]
async fn test_health_check_does_not_touch_the_provider() {
    let provider = FakeProvider::default();
    let server = test_server(provider.clone());

    server.get("/health/check").await.assert_status_ok();

    assert_eq!(provider.calls(), 0);
}
