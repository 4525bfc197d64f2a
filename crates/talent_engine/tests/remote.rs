use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use talent_core::{FilterCriteria, Persona, SearchRequest};
use talent_engine::{FailureKind, ListingSource, RemoteListingSource, SearchSettings};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> RemoteListingSource {
    RemoteListingSource::new(SearchSettings {
        base_url: server.uri(),
        ..SearchSettings::default()
    })
    .expect("valid settings")
}

fn react_request() -> SearchRequest {
    SearchRequest::new("React developer", FilterCriteria::default())
}

#[tokio::test]
async fn posts_query_filters_and_top_k() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "React developer",
            "filters": {
                "maxDistance": 50,
                "minRating": 0.0,
                "workMode": [],
                "salaryMin": 0,
                "salaryMax": 500000
            },
            "top_k": 20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Found 1",
            "query": "React developer",
            "cached": false,
            "professionals": [{
                "id": 1,
                "name": "María González",
                "title": "Full Stack",
                "skills": "React, FastAPI, Python",
                "workMode": "Remoto, Híbrido",
                "location": "{\"city\": \"Palermo\", \"distance\": 5, \"lat\": -34.5889, \"lng\": -58.4199}",
                "salary": "5000",
                "rating": 4.8
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = source_for(&server)
        .search(&react_request())
        .await
        .expect("search ok");

    assert_eq!(result.len_for(Persona::Employer), 1);
    let pro = &result.professionals[0];
    assert_eq!(pro.skills, vec!["React", "FastAPI", "Python"]);
    assert_eq!(pro.work_mode, vec!["Remoto", "Híbrido"]);
    assert_eq!(pro.location.city, "Palermo");
    assert_eq!(pro.salary, 5000.0);
    assert_eq!(result.response.as_deref(), Some("Found 1"));
}

#[tokio::test]
async fn empty_body_object_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"professionals": []})))
        .mount(&server)
        .await;

    let result = source_for(&server).search(&react_request()).await.unwrap();
    assert!(result.is_empty_for(Persona::Employer));
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .search(&react_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .search(&react_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let source = RemoteListingSource::new(SearchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..SearchSettings::default()
    })
    .unwrap();

    let err = source.search(&react_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rag/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"professionals\": []}"))
        .mount(&server)
        .await;

    let source = RemoteListingSource::new(SearchSettings {
        base_url: server.uri(),
        max_bytes: 8,
        ..SearchSettings::default()
    })
    .unwrap();

    let err = source.search(&react_request()).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 8, .. }));
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    // Grab a free port and close it again so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = RemoteListingSource::new(SearchSettings {
        base_url: format!("http://{addr}"),
        ..SearchSettings::default()
    })
    .unwrap();

    let err = source.search(&react_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn remote_browse_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = source_for(&server).browse().await.unwrap();
    assert!(result.is_empty_for(Persona::Employer));
    assert!(result.is_empty_for(Persona::Jobseeker));
}
