use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shortlink_client::api::{
    ApiClient, HttpRequest, HttpTransport, ShortenRequest, UreqTransport,
};
use shortlink_client::errors::ClientError;
use shortlink_client::storage::{MemoryTokenStore, TokenStore};

#[tokio::test(flavor = "multi_thread")]
async fn test_get_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me/links"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": {"links": []}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let transport = UreqTransport::default();
    let response = transport
        .send(
            HttpRequest::get(format!("{}/api/v1/me/links", server.uri()))
                .with_bearer(Some("tok".to_string())),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert!(response.body.contains("links"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_is_a_response_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/shorten"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"message": "Alias already taken"}"#),
        )
        .mount(&server)
        .await;

    let transport = UreqTransport::new(Some(Duration::from_secs(5)));
    let response = transport
        .send(HttpRequest::post_json(
            format!("{}/api/v1/shorten", server.uri()),
            r#"{"url":"https://example.com"}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 409);
    assert!(!response.is_success());
    assert!(response.body.contains("Alias already taken"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_host_is_network_error() {
    // bind then drop so the port is free but closed
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{}", port);

    let transport = UreqTransport::new(Some(Duration::from_secs(2)));
    let err = transport
        .send(HttpRequest::get(format!("{}/api/v1/me/links", uri)))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_client_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/shorten"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"url": "https://example.com", "alias": "mine"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "data": {
                "link": {"short_url": "https://s.example/mine"},
                "token": "guest-1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me/links"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .and(header("Authorization", "Bearer guest-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "links": [{
                    "short_code": "mine",
                    "short_url": "https://s.example/mine",
                    "original_url": "https://example.com",
                    "click_count": 0,
                    "created_at": "2024-06-15T12:00:00Z"
                }],
                "total": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let api = ApiClient::new(
        format!("{}/api/v1/", server.uri()),
        tokens.clone(),
        Arc::new(UreqTransport::default()),
    );

    let data = api
        .shorten_url(&ShortenRequest::new("https://example.com").alias("mine"))
        .await
        .unwrap();
    assert_eq!(data.link.short_url, "https://s.example/mine");
    tokens.save(data.token.as_deref().unwrap()).unwrap();

    let page = api.list_my_links().await.unwrap().unwrap();
    assert_eq!(page.links().len(), 1);
    assert_eq!(page.links()[0].short_code, "mine");
}
