//! Conversion of request objects into their JSON wire form.

use serde_json::{Map, Value};

use crate::models::Request;

/// A JSON object, as sent in request bodies and found in responses.
pub type JsonObject = Map<String, Value>;

/// Internal field renamed on the wire; `type` is reserved in most languages.
const RENAMED_FIELD: (&str, &str) = ("listing_type", "type");

/// Serializes a request object into a JSON object.
///
/// - Unset fields are omitted.
/// - A nullable field holding an empty array, an empty string, zero or
///   `false` is sent as an explicit `null`.
/// - Every other set field is sent as its value.
/// - `listing_type` is sent as `type`.
#[must_use]
pub fn serialize<R: Request>(request: &R) -> JsonObject {
    let mut map = Map::new();

    for (name, value) in request.fields() {
        let Some(value) = value else { continue };

        let value = if R::NULLABLE.contains(&name) && is_empty(&value) {
            Value::Null
        } else {
            value
        };

        map.insert(wire_name(name).to_string(), value);
    }

    map
}

fn wire_name(name: &'static str) -> &'static str {
    if name == RENAMED_FIELD.0 {
        RENAMED_FIELD.1
    } else {
        name
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() < f64::EPSILON),
        Value::Bool(b) => !b,
        _ => false,
    }
}

/// Converts an optional field into an optional JSON value.
pub(crate) fn field<T>(value: &Option<T>) -> Option<Value>
where
    T: Clone + Into<Value>,
{
    value.clone().map(Into::into)
}

/// Converts an optional list of nested request objects.
pub(crate) fn nested<R: Request>(items: &Option<Vec<R>>) -> Option<Value> {
    items.as_ref().map(|items| {
        items
            .iter()
            .map(|item| Value::Object(serialize(item)))
            .collect()
    })
}

/// Converts an optional list of raw JSON objects.
pub(crate) fn objects(items: &Option<Vec<JsonObject>>) -> Option<Value> {
    items
        .as_ref()
        .map(|items| items.iter().cloned().map(Value::Object).collect())
}
