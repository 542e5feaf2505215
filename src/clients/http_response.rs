//! HTTP response handling for the Etsy API SDK.
//!
//! This module provides [`HttpResponse`], which turns a raw status and body
//! into the value handed back to callers or into an [`ApiError`].

use serde_json::{json, Value};

use crate::clients::errors::ApiError;

/// A response received from the Etsy API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded JSON body.
    ///
    /// An empty body decodes to `Null`. An error body that is not JSON is
    /// wrapped as `{"raw_body": "<text>"}`.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response from a status code and an already decoded body.
    #[must_use]
    pub const fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Decodes a raw response body.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if a 2xx response carries a non-empty
    /// body that is not valid JSON.
    pub fn from_body_text(code: u16, text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::new(code, Value::Null));
        }

        match serde_json::from_str(text) {
            Ok(body) => Ok(Self::new(code, body)),
            Err(e) if is_success(code) => Err(e),
            Err(_) => Ok(Self::new(code, json!({ "raw_body": text }))),
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        is_success(self.code)
    }

    /// Converts the response into the value returned to callers.
    ///
    /// A 204 becomes `{"status": "OK"}`, any other 2xx yields its decoded
    /// body.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] matching a non-2xx status.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.code == 204 {
            return Ok(json!({ "status": "OK" }));
        }

        match ApiError::from_status(self.code, self.body.clone()) {
            Some(error) => Err(error),
            None => Ok(self.body),
        }
    }
}

const fn is_success(code: u16) -> bool {
    code >= 200 && code < 300
}
