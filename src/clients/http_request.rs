//! HTTP request types for the Etsy API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, and the
//! [`RequestBody`] payloads a request can carry.

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::query::QueryParams;
use crate::error::ValidationError;

/// HTTP methods used by the Etsy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for the methods that must carry a payload.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// The binary part of a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name (`image`, `file`, `video`).
    pub name: &'static str,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// File name sent in the part's content disposition.
    pub file_name: String,
    /// Explicit MIME type for the part, if any.
    pub mime: Option<&'static str>,
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("name", &self.name)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .finish()
    }
}

/// A multipart form: one file part plus plain text fields.
///
/// # Example
///
/// ```rust
/// use etsy_api::clients::{FilePart, MultipartBody};
///
/// let body = MultipartBody::new(FilePart {
///     name: "image",
///     bytes: vec![0xff, 0xd8],
///     file_name: "image".to_string(),
///     mime: None,
/// })
/// .text("rank", Some(1))
/// .text("alt_text", None::<String>);
///
/// assert_eq!(body.fields, vec![("rank", "1".to_string())]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartBody {
    /// The file part.
    pub file: FilePart,
    /// Text fields in insertion order. Absent values are never stored.
    pub fields: Vec<(&'static str, String)>,
}

impl MultipartBody {
    /// Creates a form holding only the file part.
    #[must_use]
    pub const fn new(file: FilePart) -> Self {
        Self {
            file,
            fields: Vec::new(),
        }
    }

    /// Adds a text field if `value` is present.
    #[must_use]
    pub fn text<T: fmt::Display>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, value.to_string()));
        }
        self
    }

    /// Builds a `reqwest` form for one dispatch.
    ///
    /// A form is consumed when sent, so a new one is built for every attempt.
    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut part = reqwest::multipart::Part::bytes(self.file.bytes.clone())
            .file_name(self.file.file_name.clone());
        if let Some(mime) = self.file.mime {
            part = part.mime_str(mime)?;
        }

        let form = self
            .fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(*name, value.clone())
            });
        Ok(form.part(self.file.name, part))
    }
}

/// The payload of a mutating request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON object.
    Json(Map<String, Value>),
    /// A multipart form upload.
    Multipart(MultipartBody),
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        Self::Json(map)
    }
}

impl From<MultipartBody> for RequestBody {
    fn from(body: MultipartBody) -> Self {
        Self::Multipart(body)
    }
}

/// An HTTP request to be sent to the Etsy API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use etsy_api::clients::{HttpMethod, HttpRequest, QueryParams};
/// use serde_json::{json, Map};
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "shops/1/receipts")
///     .query(QueryParams::new().param("limit", Some(25)))
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let mut body = Map::new();
/// body.insert("title".to_string(), json!("Mugs"));
/// let post_request = HttpRequest::builder(HttpMethod::Post, "shops/1/sections")
///     .body(body)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base URL.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBody`] if `http_method` is `Post`,
    /// `Put` or `Patch` and `body` is `None`.
    pub fn verify(&self) -> Result<(), ValidationError> {
        if self.http_method.requires_body() && self.body.is_none() {
            return Err(ValidationError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    query: QueryParams,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: QueryParams::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body if one is given.
    #[must_use]
    pub fn body_opt(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, ValidationError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
