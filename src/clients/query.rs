//! Query-string construction for GET requests.

use std::fmt::Display;

/// An ordered list of query parameters.
///
/// Parameters are kept in insertion order. A parameter whose value is `None`
/// is remembered but never rendered.
///
/// # Example
///
/// ```rust
/// use etsy_api::clients::{build_query, QueryParams};
///
/// let params = QueryParams::new()
///     .param("limit", None::<u32>)
///     .param("offset", Some(100));
///
/// assert_eq!(build_query("https://x/listings", &params), "https://x/listings?offset=100");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, Option<String>)>);

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param<T: Display>(mut self, key: &'static str, value: Option<T>) -> Self {
        self.0.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Adds a list parameter, rendered comma-separated.
    #[must_use]
    pub fn list<T: Display>(mut self, key: &'static str, values: Option<&[T]>) -> Self {
        let joined = values.map(|values| {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });
        self.0.push((key, joined));
        self
    }

    /// Returns `true` if no parameter would be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, value)| value.is_none())
    }

    /// Iterates over the parameters that have a value.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (*key, value)))
    }
}

/// Appends `params` to `uri` as a query string.
///
/// Parameters without a value are skipped. Surviving pairs are joined with
/// `&` and appended after a `?`; if none survive the URI is returned
/// unchanged. Values are percent-encoded element by element, so the commas
/// of a list value stay literal.
#[must_use]
pub fn build_query(uri: &str, params: &QueryParams) -> String {
    let rendered = params
        .present()
        .map(|(key, value)| format!("{key}={}", encode_value(value)))
        .collect::<Vec<_>>()
        .join("&");

    if rendered.is_empty() {
        uri.to_string()
    } else {
        format!("{uri}?{rendered}")
    }
}

fn encode_value(value: &str) -> String {
    value
        .split(',')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
