//! HTTP response type for the Seller Center SDK.
//!
//! The body is kept as raw text; decoding into the response tree depends on
//! the invoker (content-type driven for queries, XML for commands).

use std::collections::HashMap;

/// A response received from the Seller Center API, for any status code.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use lazada_seller_center::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
///
/// let response = HttpResponse::new(200, headers, "{}".to_string());
/// assert!(response.is_ok());
/// assert_eq!(response.content_type(), Some("application/json"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers (lowercased names, multiple values preserved).
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header. Lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_covers_2xx_range() {
        assert!(HttpResponse::new(200, HashMap::new(), String::new()).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(199, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(300, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), String::new()).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-type", "text/xml"), ("x-multi", "a"), ("x-multi", "b")]),
            String::new(),
        );

        assert_eq!(response.header("Content-Type"), Some("text/xml"));
        assert_eq!(response.header("X-Multi"), Some("a"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_content_type_absent() {
        let response = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(response.content_type().is_none());
    }
}
