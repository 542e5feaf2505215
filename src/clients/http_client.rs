//! HTTP client for Etsy API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Etsy API with lazy access-token refresh.

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::token_refresh::refresh_access_token;
use crate::auth::{NoopRefreshSave, RefreshSave, Session};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::{build_query, QueryParams};
use crate::config::EtsyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Etsy API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`User-Agent`, `Accept`, `x-api-key`)
/// - The per-request `Authorization: Bearer` header
/// - Refreshing the access token once it has expired
/// - Mapping error statuses to [`ApiError`](crate::ApiError)
///
/// # Token refresh
///
/// Before each request the session expiry is checked. An expired token is
/// exchanged at the token endpoint, the session is replaced, and the
/// [`RefreshSave`] hook is notified; the request then goes out with the new
/// token. The session lock is held for the whole check-and-refresh step, so
/// concurrent callers never refresh the same token twice.
///
/// A token revoked before its local expiry is not detected; the API answers
/// with 401 and the call fails with [`ApiError::Unauthorised`](crate::ApiError::Unauthorised).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use etsy_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(config, session)?
///     .with_refresh_save(|access: &str, refresh: &str, expires| {
///         store.save(access, refresh, expires);
///     });
///
/// let request = HttpRequest::builder(HttpMethod::Get, "openapi-ping").build()?;
/// let pong = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// SDK configuration (URLs, API key).
    config: EtsyConfig,
    /// Default headers to include in all API requests.
    default_headers: HashMap<String, String>,
    /// The current user credentials.
    session: Mutex<Session>,
    /// Notified after every successful refresh.
    refresh_save: Box<dyn RefreshSave>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given user session.
    ///
    /// The refreshed-credentials hook defaults to [`NoopRefreshSave`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying `reqwest` client
    /// cannot be created (TLS initialization failure).
    pub fn new(config: EtsyConfig, session: Session) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Etsy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "x-api-key".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            config,
            default_headers,
            session: Mutex::new(session),
            refresh_save: Box::new(NoopRefreshSave),
        })
    }

    /// Sets the hook notified with refreshed credentials.
    #[must_use]
    pub fn with_refresh_save(mut self, refresh_save: impl RefreshSave + 'static) -> Self {
        self.refresh_save = Box::new(refresh_save);
        self
    }

    /// Returns the SDK configuration.
    #[must_use]
    pub const fn config(&self) -> &EtsyConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Returns the user id embedded in the current access token.
    pub async fn user_id(&self) -> String {
        self.session.lock().await.user_id().to_string()
    }

    /// Refreshes the access token regardless of its expiry.
    ///
    /// Returns the new session. The [`RefreshSave`] hook is notified first.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the token endpoint call fails; the session is
    /// left unchanged in that case.
    pub async fn refresh(&self) -> Result<Session, HttpError> {
        let mut session = self.session.lock().await;
        self.refresh_locked(&mut session).await?;
        Ok(session.clone())
    }

    /// Sends an HTTP request to the Etsy API.
    ///
    /// The request is validated before anything else happens, so a rejected
    /// request never triggers a token refresh.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`Validation`)
    /// - The token refresh or the request fails in transport (`Network`)
    /// - A non-2xx response is received (`Api`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<Value, HttpError> {
        request.verify()?;

        let token = self.bearer_token().await?;
        let url = build_query(&self.config.base_url().join(&request.path), &request.query);

        tracing::debug!(method = %request.http_method, url = %url, "Sending Etsy API request");

        let mut req_builder = self.client.request(request.http_method.into(), &url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.bearer_auth(&token);

        req_builder = match &request.body {
            Some(RequestBody::Json(map)) => req_builder.json(map),
            Some(RequestBody::Multipart(body)) => req_builder.multipart(body.to_form()?),
            None => req_builder,
        };

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body_text = res.text().await?;
        let response = HttpResponse::from_body_text(code, &body_text)?;

        tracing::debug!(status = code, path = %request.path, "Received Etsy API response");
        if !response.is_ok() {
            tracing::warn!(
                status = code,
                method = %request.http_method,
                path = %request.path,
                "Etsy API returned an error status"
            );
        }

        Ok(response.into_result()?)
    }

    /// Builds and sends a request in one step.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Validation`] if a mutating method is given no
    /// body, and otherwise the errors of [`request`](Self::request).
    pub async fn issue(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<RequestBody>,
        query: QueryParams,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(method, path)
            .body_opt(body)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Returns a bearer token that has not expired, refreshing if needed.
    async fn bearer_token(&self) -> Result<String, HttpError> {
        let mut session = self.session.lock().await;
        if session.expired() {
            tracing::info!(user_id = session.user_id(), "Access token expired, refreshing");
            self.refresh_locked(&mut session).await?;
        }
        Ok(session.access_token.clone())
    }

    async fn refresh_locked(&self, session: &mut Session) -> Result<(), HttpError> {
        let response =
            refresh_access_token(&self.client, &self.config, &session.refresh_token).await?;
        session.apply_refresh(&response, Utc::now());

        tracing::debug!(
            user_id = session.user_id(),
            expires = %session.expires,
            "Access token refreshed"
        );

        self.refresh_save.save(
            &session.access_token,
            &session.refresh_token,
            session.expires,
        );
        Ok(())
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url())
            .field("token_url", &self.config.token_url())
            .finish_non_exhaustive()
    }
}
