//! HTTP-specific error types for the Etsy API SDK.
//!
//! # Error Handling
//!
//! The SDK separates three kinds of failure:
//!
//! - [`ValidationError`]: the caller broke a local precondition (missing
//!   mandatory field, mutating call without payload). Nothing was sent.
//! - [`ApiError`]: the API answered with an error status. The decoded error
//!   body is attached for diagnostics.
//! - [`HttpError::Network`]: the transport failed (DNS, connection reset).
//!   The `reqwest` error is passed through untouched.
//!
//! [`HttpError`] unifies them so callers can pattern-match on one type.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{ApiError, HttpError};
//!
//! match api.get_listing(123, None).await {
//!     Ok(listing) => println!("Listing: {listing}"),
//!     Err(HttpError::Api(ApiError::NotFound { body })) => println!("gone: {body}"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status(), e.body()),
//!     Err(HttpError::Validation(e)) => println!("bad request object: {e}"),
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::error::ValidationError;

/// An error status returned by the Etsy API.
///
/// Each listed status maps to its own variant; any other non-2xx status is
/// reported as [`ApiError::UnexpectedStatus`].
///
/// | Status | Variant |
/// |---|---|
/// | 400 | [`ApiError::BadRequest`] |
/// | 401 | [`ApiError::Unauthorised`] |
/// | 403 | [`ApiError::Forbidden`] |
/// | 404 | [`ApiError::NotFound`] |
/// | 409 | [`ApiError::Conflict`] |
/// | 500 | [`ApiError::InternalError`] |
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// HTTP 400.
    #[error("Bad request: {body}")]
    BadRequest {
        /// The decoded error body.
        body: Value,
    },

    /// HTTP 401. Also returned when a token is revoked before its local expiry.
    #[error("Unauthorised: {body}")]
    Unauthorised {
        /// The decoded error body.
        body: Value,
    },

    /// HTTP 403.
    #[error("Forbidden: {body}")]
    Forbidden {
        /// The decoded error body.
        body: Value,
    },

    /// HTTP 404.
    #[error("Not found: {body}")]
    NotFound {
        /// The decoded error body.
        body: Value,
    },

    /// HTTP 409.
    #[error("Conflict: {body}")]
    Conflict {
        /// The decoded error body.
        body: Value,
    },

    /// HTTP 500.
    #[error("Internal error: {body}")]
    InternalError {
        /// The decoded error body.
        body: Value,
    },

    /// Any other non-2xx status.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The decoded error body.
        body: Value,
    },
}

impl ApiError {
    /// Maps a response status to an error.
    ///
    /// Returns `None` for 2xx statuses.
    #[must_use]
    pub fn from_status(status: u16, body: Value) -> Option<Self> {
        let error = match status {
            200..=299 => return None,
            400 => Self::BadRequest { body },
            401 => Self::Unauthorised { body },
            403 => Self::Forbidden { body },
            404 => Self::NotFound { body },
            409 => Self::Conflict { body },
            500 => Self::InternalError { body },
            _ => Self::UnexpectedStatus { status, body },
        };
        Some(error)
    }

    /// Returns the HTTP status code of this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::Unauthorised { .. } => 401,
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::InternalError { .. } => 500,
            Self::UnexpectedStatus { status, .. } => *status,
        }
    }

    /// Returns the decoded error body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        match self {
            Self::BadRequest { body }
            | Self::Unauthorised { body }
            | Self::Forbidden { body }
            | Self::NotFound { body }
            | Self::Conflict { body }
            | Self::InternalError { body }
            | Self::UnexpectedStatus { body, .. } => body,
        }
    }
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API returned an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A local precondition failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation has no implementation in this client.
    #[error("{operation} is not supported by this client")]
    Unsupported {
        /// The name of the endpoint operation.
        operation: &'static str,
    },
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
