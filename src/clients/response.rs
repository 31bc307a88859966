//! Path extraction over decoded responses.
//!
//! Paths are field names joined by `->`, for example
//! `SuccessResponse->Body->Orders`. The same walk is used to pull payloads
//! out of success bodies and to probe for error envelopes.

use serde_json::Value;

/// Separator between path segments.
pub const PATH_SEPARATOR: &str = "->";

/// Follows `path` through nested objects.
///
/// Returns `None` as soon as a segment is missing, the current value is not
/// an object, or the final value is an explicit `null`.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::clients::extract;
/// use serde_json::json;
///
/// let response = json!({"SuccessResponse": {"Body": {"Orders": [{"OrderId": 1}]}}});
///
/// assert_eq!(
///     extract(&response, "SuccessResponse->Body->Orders"),
///     Some(&json!([{"OrderId": 1}]))
/// );
/// assert_eq!(extract(&response, "ErrorResponse->Head->ErrorMessage"), None);
/// ```
#[must_use]
pub fn extract<'a>(response: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(response, |current, segment| current.as_object()?.get(segment))
        .filter(|value| !value.is_null())
}

/// Renders an extracted leaf as text. Strings are returned unquoted; other
/// values use their JSON form.
pub(crate) fn extract_text(response: &Value, path: &str) -> Option<String> {
    extract(response, path).map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// Returns `true` for a value that carries nothing: an empty array, an
/// empty object or an empty string (how XML renders an empty element).
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Takes the value at `path` out of `response`, or `None` when it is absent
/// or empty.
pub(crate) fn take_non_empty(response: &mut Value, path: &str) -> Option<Value> {
    let found = extract(response, path).is_some_and(|value| !is_empty(value));
    if !found {
        return None;
    }
    path.split(PATH_SEPARATOR)
        .try_fold(response, |current, segment| current.get_mut(segment))
        .map(Value::take)
}
