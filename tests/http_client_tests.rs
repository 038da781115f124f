//! Integration tests for the HTTP client functionality.
//!
//! These tests run [`HttpClient`] against a local mock server and verify
//! URL construction, default headers, JSON and multipart bodies, and error
//! mapping.

use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use help_center::clients::{FileSource, MultipartPart};
use help_center::rest::resources::{ListParams, NewCategory, SortOrder};
use help_center::rest::FileUpload;
use help_center::{
    AccessToken, ApiToken, Credentials, HelpCenterConfig, HostUrl, HttpClient, HttpError,
    HttpMethod, HttpRequest, ResourceError, ResourceKind, RestClient, Subdomain,
};

/// Creates a config that sends every request to `server`.
fn config_for(server: &MockServer) -> HelpCenterConfig {
    HelpCenterConfig::builder()
        .subdomain(Subdomain::new("acme").unwrap())
        .credentials(
            Credentials::api_token("agent@example.com", ApiToken::new("secret").unwrap())
                .unwrap(),
        )
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_client_targets_subdomain_by_default() {
    let config = HelpCenterConfig::builder()
        .subdomain(Subdomain::new("acme").unwrap())
        .credentials(Credentials::oauth(AccessToken::new("tok").unwrap()))
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap();

    let client = HttpClient::new(&config);

    assert_eq!(client.base_uri(), "https://acme.zendesk.com");
    assert_eq!(client.base_path(), "/api/v2");
    assert_eq!(
        client.url_for("help_center/articles.json"),
        "https://acme.zendesk.com/api/v2/help_center/articles.json"
    );
    assert_eq!(
        client.default_headers().get("Authorization"),
        Some(&"Bearer tok".to_string())
    );
    assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
}

#[tokio::test]
async fn test_get_sends_auth_header_and_query() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let expected_auth = config.credentials().authorization_header();

    Mock::given(method("GET"))
        .and(path("/api/v2/help_center/en-us/categories.json"))
        .and(header("Authorization", expected_auth.as_str()))
        .and(query_param("per_page", "10"))
        .and(query_param("sort_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{"id": 1, "name": "FAQ"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config);
    let params = ListParams {
        per_page: Some(10),
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    };

    let response = client
        .categories()
        .with_locale("en-us")
        .find_all(&params)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["categories"][0]["name"], "FAQ");
}

#[tokio::test]
async fn test_post_sends_json_envelope_and_chains_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/help_center/categories.json"))
        .and(body_json(json!({"category": {"name": "FAQ"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"category": {"id": 7}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    client
        .categories()
        .create(&NewCategory::new("FAQ"))
        .await
        .unwrap();

    assert_eq!(client.last_id(ResourceKind::Category), Some(7));
}

#[tokio::test]
async fn test_multipart_upload_streams_file_part() {
    let server = MockServer::start().await;
    let mut file = tempfile::Builder::new()
        .prefix("manual")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(b"hello attachment").unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/help_center/articles/42/attachments.json"))
        .and(query_param("inline", "true"))
        .and(|request: &Request| {
            let body = String::from_utf8_lossy(&request.body);
            body.contains("name=\"file\"") && body.contains("hello attachment")
        })
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "article_attachment": {"id": 900, "inline": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    client
        .article_attachments()
        .create(&FileUpload::new(file.path()).article_id(42).inline(true))
        .await
        .unwrap();

    assert_eq!(client.last_id(ResourceKind::ArticleAttachment), Some(900));
}

#[tokio::test]
async fn test_unreadable_upload_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(
        HttpMethod::Post,
        "help_center/articles/attachments.json",
    )
    .part(MultipartPart {
        name: "file".to_string(),
        file_name: "gone.bin".to_string(),
        source: FileSource::new("/nonexistent/dir/gone.bin"),
    })
    .build()
    .unwrap();

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::Io(_))));
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_error_response_maps_status_and_request_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/help_center/sections/5.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-123")
                .set_body_json(json!({"error": "RecordNotFound", "description": "Not found"})),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server));
    let error = client.sections().find(5).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.request_id(), Some("req-123"));
    match error {
        ResourceError::Transport {
            path,
            source: HttpError::Response(response),
            ..
        } => {
            assert_eq!(path, "help_center/sections/5.json");
            assert!(response.message.contains("RecordNotFound"));
            assert!(response.message.contains("req-123"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_raw_request_is_sent_once_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/help_center/articles/3.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Delete, "help_center/articles/3.json")
        .build()
        .unwrap();

    let result = client.request(request).await;

    assert!(matches!(
        result,
        Err(HttpError::Response(ref e)) if e.code == 503
    ));
}

#[tokio::test]
async fn test_clients_share_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/help_center/categories.json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"category": {"id": 11}})),
        )
        .mount(&server)
        .await;

    let transport = Arc::new(HttpClient::new(&config_for(&server)));
    let first = RestClient::with_transport(transport.clone());
    let second = RestClient::with_transport(transport);

    first
        .categories()
        .create(&NewCategory::new("A"))
        .await
        .unwrap();

    assert_eq!(first.last_id(ResourceKind::Category), Some(11));
    assert_eq!(second.last_id(ResourceKind::Category), None);
}
