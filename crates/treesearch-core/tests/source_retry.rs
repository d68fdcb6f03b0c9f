//! Adapter retry behavior against a mock authority server

use gts_api::GtsClient;
use std::time::Duration;
use treesearch_core::{GtsSource, LocationSource, RetryPolicy, SourceId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quick_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
    }
}

fn source_for(server: &MockServer) -> GtsSource {
    GtsSource::with_client(GtsClient::with_base_url(&server.uri()), quick_retry())
}

#[tokio::test]
async fn transient_server_error_is_retried_to_success() {
    let server = MockServer::start().await;
    // First attempt hits a 500, the retry gets the real payload
    Mock::given(method("GET"))
        .and(path("/treesearch/genus/Pinus/species/pinea"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treesearch/genus/Pinus/species/pinea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "taxon": "Pinus pinea",
                "TSGeolinks": [{ "country": "Spain" }]
            }]
        })))
        .mount(&server)
        .await;

    let locations = source_for(&server)
        .lookup_locations("Pinus pinea")
        .await
        .unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].description, "Spain");
    assert_eq!(locations[0].source, SourceId::Gts);
}

#[tokio::test]
async fn persistent_server_error_exhausts_the_attempt_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = source_for(&server)
        .lookup_locations("Pinus pinea")
        .await
        .unwrap_err();

    assert!(err.is_transient());
}
