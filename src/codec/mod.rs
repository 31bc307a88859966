//! Body codecs for Seller Center requests and responses.
//!
//! - [`xml`]: XML documents to and from the generic response tree
//! - [`decode_body`]: JSON-or-XML decoding driven by a response content type

pub mod xml;

use serde_json::Value;
use thiserror::Error;

/// Error returned when an XML document cannot be parsed or re-serialized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed XML: {reason}")]
pub struct XmlError {
    /// What the parser reported.
    pub reason: String,
}

impl XmlError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Returns `true` if the content type names a JSON media type.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("json"))
}

/// Decodes a response body into the generic tree.
///
/// JSON is used when `content_type` names a JSON media type, XML otherwise.
/// XML keeps its root element as the top-level key, matching the JSON shape.
/// Returns `None` when the body has no usable structure: it fails to parse,
/// or decodes to something other than an object (`null`, `false`, a bare
/// string...).
#[must_use]
pub fn decode_body(body: &str, content_type: Option<&str>) -> Option<Value> {
    let decoded = if is_json_content_type(content_type) {
        serde_json::from_str::<Value>(body).ok()?
    } else {
        xml::parse_document_with_root(body).ok()?
    };

    let usable = matches!(&decoded, Value::Object(map) if !map.is_empty());
    usable.then_some(decoded)
}
