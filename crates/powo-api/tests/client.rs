//! Client tests against a mock Kew API

use powo_api::{PowoClient, PowoError, SearchQuery};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PowoClient {
    PowoClient::with_base_urls(&server.uri(), &server.uri())
}

#[tokio::test]
async fn search_parses_name_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "genus:Pinus,species:pinea,author:L."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalResults": 1,
            "results": [{
                "fqId": "urn:lsid:ipni.org:names:676604-1",
                "name": "Pinus pinea",
                "authors": "L.",
                "rank": "spec.",
                "accepted": true,
                "family": "Pinaceae"
            }]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .search(&SearchQuery {
            genus: "Pinus",
            species: "pinea",
            author: "L.",
        })
        .await
        .unwrap();

    assert_eq!(response.total_results, 1);
    assert_eq!(response.results.len(), 1);
    let record = &response.results[0];
    assert_eq!(record.name.as_deref(), Some("Pinus pinea"));
    assert_eq!(record.authors.as_deref(), Some("L."));
    assert_eq!(record.accepted, Some(true));
}

#[tokio::test]
async fn search_omits_empty_terms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "genus:Pinus,species:pinea"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "totalResults": 0, "results": [] })),
        )
        .mount(&server)
        .await;

    let response = client_for(&server)
        .search(&SearchQuery {
            genus: "Pinus",
            species: "pinea",
            author: "",
        })
        .await
        .unwrap();

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn lookup_parses_synonyms_and_distribution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/taxon/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fqId": "urn:lsid:ipni.org:names:676604-1",
            "name": "Pinus pinea",
            "authors": "L.",
            "taxonomicStatus": "Accepted",
            "synonyms": [
                { "fqId": "urn:lsid:ipni.org:names:263359-2", "name": "Pinus sativa", "author": "Lam." }
            ],
            "distribution": {
                "natives": [
                    { "name": "Spain", "tdwgCode": "SPA", "tdwgLevel": 3 },
                    { "name": "Italy", "tdwgCode": "ITA", "tdwgLevel": 3 }
                ],
                "introduced": [
                    { "name": "South Africa", "tdwgCode": "CPP", "tdwgLevel": 3 }
                ]
            }
        })))
        .mount(&server)
        .await;

    let taxon = client_for(&server)
        .lookup("urn:lsid:ipni.org:names:676604-1")
        .await
        .unwrap();

    assert_eq!(taxon.taxonomic_status.as_deref(), Some("Accepted"));
    assert_eq!(taxon.synonyms.len(), 1);
    assert_eq!(taxon.synonyms[0].name.as_deref(), Some("Pinus sativa"));
    let distribution = taxon.distribution.unwrap();
    assert_eq!(distribution.natives.len(), 2);
    assert_eq!(distribution.introduced.len(), 1);
}

#[tokio::test]
async fn lookup_reports_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).lookup("urn:lsid:nope").await.unwrap_err();
    match err {
        PowoError::Status(code) => assert_eq!(code.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn search_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchQuery {
            genus: "Pinus",
            species: "pinea",
            author: "L.",
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PowoError::Json(_)));
}
