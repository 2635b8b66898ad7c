#![allow(clippy::unwrap_used)]
// Integration tests for `ScorpionClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scorpion_api::{Error, ParamMap, ScorpionClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ScorpionClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ScorpionClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn api_path(suffix: &str) -> String {
    format!("/v.api/apis/EV/{suffix}")
}

// ── Connect tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_accepts_any_http_answer() {
    // No mocks mounted: wiremock answers 404, which still proves a
    // device is listening at the address.
    let server = MockServer::start().await;
    let addr = server.address();

    let client = ScorpionClient::connect(
        &addr.ip().to_string(),
        addr.port(),
        &scorpion_api::TransportConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(client.base_url().port(), Some(addr.port()));
}

#[tokio::test]
async fn test_connect_fails_when_nothing_listens() {
    // Bind a port, then release it so the connect attempt is refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = ScorpionClient::connect(
        "127.0.0.1",
        port,
        &scorpion_api::TransportConfig::default(),
    )
    .await;

    match result {
        Err(err) => assert!(err.is_connect(), "expected connect failure, got: {err:?}"),
        Ok(_) => panic!("expected connect failure, got a client"),
    }
}

// ── Read tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_parameter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("GET/parameter/55")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "55",
            "name": "Alias",
            "value": "MFC-RK12-007"
        })))
        .mount(&server)
        .await;

    let record = client.get("55").await.unwrap();

    assert_eq!(record.id, "55");
    assert_eq!(record.name.as_deref(), Some("Alias"));
    assert_eq!(record.value_str(), Some("MFC-RK12-007"));
    assert!(record.error.is_none());
}

#[tokio::test]
async fn test_get_api_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("GET/parameter/55")))
        .respond_with(ResponseTemplate::new(503).set_body_string("API disabled"))
        .mount(&server)
        .await;

    let result = client.get("55").await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("API disabled"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("GET/parameter/55")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.get("55").await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("not json"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Write tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_post_batch() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("SET/parameter")))
        .and(body_json(json!({ "5204": "MFC-007", "6000.0": "10.0.1.7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "5204", "name": "NMOS Name", "value": "MFC-007" },
            { "id": "6000.0", "name": "Trunk A", "value": "10.0.1.7" }
        ])))
        .mount(&server)
        .await;

    let mut query = ParamMap::new();
    query.insert("5204".into(), "MFC-007".into());
    query.insert("6000.0".into(), "10.0.1.7".into());

    let records = client.post(&query).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "5204");
    assert_eq!(records[1].id, "6000.0");
}

#[tokio::test]
async fn test_post_preserves_key_order_on_the_wire() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("SET/parameter")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut query = ParamMap::new();
    query.insert("9000".into(), "z".into());
    query.insert("100".into(), "a".into());
    query.insert("5000.1".into(), "m".into());

    client.post(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: ParamMap = serde_json::from_slice(&requests[0].body).unwrap();
    let keys: Vec<&str> = sent.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["9000", "100", "5000.1"]);
}

#[tokio::test]
async fn test_post_item_error_passthrough() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("SET/parameter")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "3009.0", "value": "0" },
            { "id": "3009.1", "error": "timeout" }
        ])))
        .mount(&server)
        .await;

    let mut query = ParamMap::new();
    query.insert("3009.0".into(), "0".into());
    query.insert("3009.1".into(), "0".into());

    let records = client.post(&query).await.unwrap();

    assert!(records[0].error.is_none());
    assert_eq!(records[1].error.as_deref(), Some("timeout"));
}
