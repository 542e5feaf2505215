//! Integration tests for the HTTP client against a mock Etsy server.
//!
//! These tests verify status mapping, request validation and the
//! refresh-then-retry flow for expired access tokens.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use etsy_api::clients::{HttpClient, HttpMethod, HttpRequest, QueryParams};
use etsy_api::{ApiError, ApiKey, ApiUrl, EtsyConfig, HttpError, Session, ValidationError};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/v3/application";
const TOKEN_PATH: &str = "/oauth/token";

fn create_test_config(server: &MockServer) -> EtsyConfig {
    EtsyConfig::builder()
        .api_key(ApiKey::new("keystring").unwrap())
        .base_url(ApiUrl::new(format!("{}{API_PATH}", server.uri())).unwrap())
        .token_url(ApiUrl::new(format!("{}{TOKEN_PATH}", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn live_session() -> Session {
    Session::new(
        "12345678.old-at",
        "12345678.old-rt",
        Utc::now() + Duration::hours(1),
    )
    .unwrap()
}

fn expired_session() -> Session {
    Session::new(
        "12345678.old-at",
        "12345678.old-rt",
        Utc::now() - Duration::minutes(1),
    )
    .unwrap()
}

fn create_test_client(server: &MockServer, session: Session) -> HttpClient {
    HttpClient::new(create_test_config(server), session).unwrap()
}

async fn get(client: &HttpClient, endpoint: &str) -> Result<serde_json::Value, HttpError> {
    client
        .issue(HttpMethod::Get, endpoint, None, QueryParams::new())
        .await
}

// ============================================================================
// Status Mapping Tests
// ============================================================================

#[tokio::test]
async fn test_200_returns_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop_id": 1})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let body = get(&client, "shops/1").await.unwrap();

    assert_eq!(body, json!({"shop_id": 1}));
}

#[tokio::test]
async fn test_204_returns_status_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{API_PATH}/listings/9")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let body = client
        .issue(HttpMethod::Delete, "listings/9", None, QueryParams::new())
        .await
        .unwrap();

    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn test_201_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PATH}/shops/1/sections")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"shop_section_id": 4})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let mut payload = serde_json::Map::new();
    payload.insert("title".to_string(), json!("Mugs"));
    let body = client
        .issue(
            HttpMethod::Post,
            "shops/1/sections",
            Some(payload.into()),
            QueryParams::new(),
        )
        .await
        .unwrap();

    assert_eq!(body["shop_section_id"], 4);
}

#[tokio::test]
async fn test_error_statuses_map_to_variants() {
    let server = MockServer::start().await;
    for code in [400_u16, 401, 403, 404, 409, 500] {
        Mock::given(method("GET"))
            .and(path(format!("{API_PATH}/status/{code}")))
            .respond_with(ResponseTemplate::new(code).set_body_json(json!({"error": code})))
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server, live_session());

    for code in [400_u16, 401, 403, 404, 409, 500] {
        let err = get(&client, &format!("status/{code}")).await.unwrap_err();
        let HttpError::Api(api_error) = err else {
            panic!("expected an API error for {code}, got {err:?}");
        };
        assert_eq!(api_error.status(), code);
        assert_eq!(api_error.body(), &json!({"error": code}));

        let matches_variant = match code {
            400 => matches!(api_error, ApiError::BadRequest { .. }),
            401 => matches!(api_error, ApiError::Unauthorised { .. }),
            403 => matches!(api_error, ApiError::Forbidden { .. }),
            404 => matches!(api_error, ApiError::NotFound { .. }),
            409 => matches!(api_error, ApiError::Conflict { .. }),
            500 => matches!(api_error, ApiError::InternalError { .. }),
            _ => false,
        };
        assert!(matches_variant, "wrong variant for {code}: {api_error:?}");
    }
}

#[tokio::test]
async fn test_unlisted_status_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "slow down"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let err = get(&client, "shops/1").await.unwrap_err();

    assert!(matches!(
        err,
        HttpError::Api(ApiError::UnexpectedStatus { status: 429, .. })
    ));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let err = get(&client, "shops/1").await.unwrap_err();

    match err {
        HttpError::Api(ApiError::InternalError { body }) => {
            assert_eq!(body, json!({"raw_body": "upstream exploded"}));
        }
        other => panic!("expected InternalError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let err = get(&client, "shops/1").await.unwrap_err();

    assert!(matches!(err, HttpError::Decode(_)));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_mutating_request_without_body_is_never_sent() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // An expired session proves validation runs before any refresh.
    let client = create_test_client(&server, expired_session());

    for http_method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
        let err = client
            .issue(http_method, "shops/1/sections", None, QueryParams::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HttpError::Validation(ValidationError::MissingBody { .. })
        ));
    }
}

#[tokio::test]
async fn test_request_carries_default_headers_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/openapi-ping")))
        .and(header("x-api-key", "keystring"))
        .and(header("accept", "application/json"))
        .and(header("authorization", "Bearer 12345678.old-at"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"application_id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let request = HttpRequest::builder(HttpMethod::Get, "openapi-ping")
        .build()
        .unwrap();

    let body = client.request(request).await.unwrap();
    assert_eq!(body["application_id"], 7);
}

// ============================================================================
// Token Refresh Tests
// ============================================================================

#[tokio::test]
async fn test_expired_session_refreshes_then_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(400))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("x-api-key", "keystring"))
        .and(body_json(json!({
            "grant_type": "refresh_token",
            "client_id": "keystring",
            "refresh_token": "12345678.old-rt"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "12345678.new-at",
            "refresh_token": "12345678.new-rt",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .and(header("authorization", "Bearer 12345678.old-at"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .and(header("authorization", "Bearer 12345678.new-at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let saved: Arc<Mutex<Vec<(String, String, DateTime<Utc>)>>> = Arc::default();
    let sink = Arc::clone(&saved);
    let before = Utc::now();
    let client = create_test_client(&server, expired_session()).with_refresh_save(
        move |access: &str, refresh: &str, expires: DateTime<Utc>| {
            sink.lock()
                .unwrap()
                .push((access.to_string(), refresh.to_string(), expires));
        },
    );

    let body = get(&client, "shops/1").await.unwrap();
    assert_eq!(body, json!({"shop_id": 1}));

    let session = client.session().await;
    assert_eq!(session.access_token, "12345678.new-at");
    assert_eq!(session.refresh_token, "12345678.new-rt");
    assert!(!session.expired());

    let saved = saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "12345678.new-at");
    assert_eq!(saved[0].1, "12345678.new-rt");
    assert!(saved[0].2 >= before + Duration::seconds(3600));
    assert_eq!(saved[0].2, session.expires);
}

#[tokio::test]
async fn test_live_session_does_not_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop_id": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    get(&client, "shops/1").await.unwrap();
    get(&client, "shops/1").await.unwrap();

    assert_eq!(client.session().await.access_token, "12345678.old-at");
}

#[tokio::test]
async fn test_refresh_failure_surfaces_and_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "refresh token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, expired_session());
    let err = get(&client, "shops/1").await.unwrap_err();

    match err {
        HttpError::Api(ApiError::BadRequest { body }) => {
            assert_eq!(body["error"], "invalid_grant");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
    assert_eq!(client.session().await.refresh_token, "12345678.old-rt");
}

#[tokio::test]
async fn test_explicit_refresh_ignores_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "12345678.forced-at",
            "refresh_token": "12345678.forced-rt",
            "expires_in": 60
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, live_session());
    let session = client.refresh().await.unwrap();

    assert_eq!(session.access_token, "12345678.forced-at");
    assert_eq!(client.user_id().await, "12345678");
}

#[tokio::test]
async fn test_concurrent_calls_refresh_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "12345678.new-at",
            "refresh_token": "12345678.new-rt",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/shops/1")))
        .and(header("authorization", "Bearer 12345678.new-at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop_id": 1})))
        .expect(4)
        .mount(&server)
        .await;

    let client = Arc::new(create_test_client(&server, expired_session()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { get(&client, "shops/1").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), json!({"shop_id": 1}));
    }
}
