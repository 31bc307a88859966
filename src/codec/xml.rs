//! XML decoding into the generic response tree, and XML request formatting.
//!
//! Decoded documents use [`serde_json::Value`] as the tree type, the same one
//! JSON responses decode into, so both formats are normalized by the same
//! [`extract`](crate::clients::extract) walk.
//!
//! # Tree Shape
//!
//! - [`parse_document`] drops the root element's name; command responses
//!   are addressed below it (`Head`, `Body->Image`).
//!   [`parse_document_with_root`] keeps it, so query paths read the same as
//!   for JSON (`SuccessResponse->Body->Orders`).
//! - An element with child elements becomes an object keyed by child name.
//!   Repeated child names collapse into an array in document order.
//! - An element with only text becomes a string (trimmed). An empty element
//!   becomes an empty string.
//! - Attributes are kept under an `@attributes` object. Text of an element
//!   that also has attributes but no children is kept under `#text`.
//!
//! ```rust
//! use lazada_seller_center::codec::xml;
//! use serde_json::json;
//!
//! let doc = xml::parse_document(
//!     "<SuccessResponse><Body><Image><Url>https://img/1.jpg</Url></Image></Body></SuccessResponse>",
//! )
//! .unwrap();
//! assert_eq!(doc, json!({"Body": {"Image": {"Url": "https://img/1.jpg"}}}));
//! ```

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde_json::{Map, Value};

use crate::codec::XmlError;

const ATTRIBUTES_KEY: &str = "@attributes";
const TEXT_KEY: &str = "#text";

#[derive(Debug, Default)]
struct Node {
    name: String,
    attributes: Map<String, Value>,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut node = Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Self::default()
        };
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| XmlError::new(e.to_string()))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| XmlError::new(e.to_string()))?
                .into_owned();
            node.attributes.insert(key, Value::String(value));
        }
        Ok(node)
    }

    fn push_child(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(siblings)) => siblings.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }

    fn finish(self) -> (String, Value) {
        let text = self.text.trim().to_string();
        let value = if !self.children.is_empty() {
            let mut object = self.children;
            if !self.attributes.is_empty() {
                object.insert(ATTRIBUTES_KEY.to_string(), Value::Object(self.attributes));
            }
            Value::Object(object)
        } else if !self.attributes.is_empty() {
            let mut object = Map::new();
            object.insert(ATTRIBUTES_KEY.to_string(), Value::Object(self.attributes));
            if !text.is_empty() {
                object.insert(TEXT_KEY.to_string(), Value::String(text));
            }
            Value::Object(object)
        } else {
            Value::String(text)
        };
        (self.name, value)
    }
}

/// Parses an XML document into the generic response tree, dropping the
/// root element's name.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is not well-formed or has no root
/// element.
pub fn parse_document(xml: &str) -> Result<Value, XmlError> {
    parse_root(xml).map(|(_, value)| value)
}

/// Parses an XML document into the generic response tree, keeping the root
/// element as the single top-level key.
///
/// `<SuccessResponse><Body/></SuccessResponse>` becomes
/// `{"SuccessResponse": {"Body": ""}}`, the same shape a JSON response has.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is not well-formed or has no root
/// element.
pub fn parse_document_with_root(xml: &str) -> Result<Value, XmlError> {
    let (name, value) = parse_root(xml)?;
    let mut document = Map::new();
    document.insert(name, value);
    Ok(Value::Object(document))
}

fn parse_root(xml: &str) -> Result<(String, Value), XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(e.to_string()))?;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(XmlError::new("multiple root elements"));
                }
                stack.push(Node::open(&start)?);
            }
            Event::Empty(start) => {
                let (name, value) = Node::open(&start)?.finish();
                attach(&mut stack, &mut root, name, value)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| XmlError::new("unexpected closing tag"))?;
                let (name, value) = node.finish();
                attach(&mut stack, &mut root, name, value)?;
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    let text = text.unescape().map_err(|e| XmlError::new(e.to_string()))?;
                    node.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::new("unclosed element"));
    }
    root.ok_or_else(|| XmlError::new("no root element"))
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(name, value);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::new("multiple root elements"));
    }
    *root = Some((name, value));
    Ok(())
}

/// Re-serializes an XML document with two-space indentation and an XML
/// declaration, dropping whitespace-only text between elements.
///
/// # Errors
///
/// Returns [`XmlError`] if the input is not a well-formed document.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::codec::xml;
///
/// let pretty = xml::pretty_print("<Request><Product><SellerSku>sku-1</SellerSku></Product></Request>").unwrap();
/// assert!(pretty.starts_with("<?xml version=\"1.0\""));
/// assert!(pretty.contains("\n    <SellerSku>sku-1</SellerSku>"));
/// ```
pub fn pretty_print(xml: &str) -> Result<String, XmlError> {
    // Validates well-formedness and the single-root rule before writing.
    parse_document(xml)?;

    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut wrote_declaration = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(e.to_string()))?;

        match event {
            Event::Eof => break,
            Event::Text(ref text) if text.iter().all(u8::is_ascii_whitespace) => {}
            Event::Decl(decl) => {
                wrote_declaration = true;
                writer
                    .write_event(Event::Decl(decl))
                    .map_err(|e| XmlError::new(e.to_string()))?;
            }
            event => {
                if !wrote_declaration {
                    wrote_declaration = true;
                    writer
                        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                        .map_err(|e| XmlError::new(e.to_string()))?;
                }
                writer
                    .write_event(event)
                    .map_err(|e| XmlError::new(e.to_string()))?;
            }
        }
    }

    let mut output =
        String::from_utf8(writer.into_inner()).map_err(|e| XmlError::new(e.to_string()))?;
    output.push('\n');
    Ok(output)
}

/// Builds the `<Request><Image><Url>…</Url></Image></Request>` body used to
/// migrate an externally hosted image. The URL is escaped.
#[must_use]
pub fn image_url_request(url: &str) -> String {
    format!(
        "<Request><Image><Url>{}</Url></Image></Request>",
        escape(url)
    )
}
