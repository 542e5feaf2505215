//! Error types for the Etsy API SDK.
//!
//! This module contains the errors raised locally, before anything is sent
//! over the wire: configuration errors and request validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` and all
//! request objects are validated into `Result<Validated<T>, ValidationError>`
//! to enable fail-fast validation. Validation errors are never retried.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the keystring of your Etsy app.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid OAuth access token.")]
    EmptyAccessToken,

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.etsy.com/v3/application').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Errors raised when a request cannot be built or sent as described.
///
/// These are caller-contract violations, distinct from errors returned
/// by the API itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field of a request object was not set.
    #[error("{request} requires '{field}' to be set")]
    MissingMandatoryField {
        /// The name of the request type.
        request: &'static str,
        /// The mandatory field that was missing.
        field: &'static str,
    },

    /// A mutating request (POST, PUT, PATCH) was issued without a payload.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// An API response could not be reshaped into a request.
    #[error("Cannot build request from response: {reason}")]
    MalformedResponse {
        /// What was wrong with the response.
        reason: String,
    },
}
