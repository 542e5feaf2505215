//! HTTP client types for Etsy API communication.
//!
//! This module provides the transport layer underneath the typed endpoint
//! methods of [`EtsyApi`](crate::EtsyApi).
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client holding the user session
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`RequestBody`]: A JSON or multipart payload
//! - [`HttpResponse`]: A decoded response and its status mapping
//! - [`QueryParams`] and [`build_query`]: Query-string construction
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//!
//! # Status mapping
//!
//! - **204**: returns `{"status": "OK"}`
//! - **Other 2xx**: returns the decoded body
//! - **400, 401, 403, 404, 409, 500**: the matching [`ApiError`] variant
//! - **Any other status**: [`ApiError::UnexpectedStatus`]
//!
//! Failed calls are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{ApiError, HttpError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    FilePart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartBody, RequestBody,
};
pub use http_response::HttpResponse;
pub use query::{build_query, QueryParams};
