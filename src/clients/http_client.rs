//! HTTP client for Seller Center API communication.
//!
//! This module provides the [`HttpClient`] type: a thin async wrapper over
//! `reqwest` that returns every HTTP exchange as an [`HttpResponse`],
//! whatever its status code. Only connection-level failures are errors.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Seller Center API.
///
/// Cloning is cheap: clones share the underlying connection pool.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lazada_seller_center::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new();
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.sellercenter.lazada.sg/?Action=GetBrands")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{}: {}", response.code, response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Lazada Seller Center SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request.
    ///
    /// Non-2xx responses are returned as `Ok`; classifying them is up to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No HTTP response is received, or its body cannot be read (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            "Received {} response ({} bytes) for {} request",
            code,
            body.len(),
            request.http_method
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Lazada Seller Center SDK v"));
        assert!(user_agent.contains(SDK_VERSION));
        assert!(user_agent.contains("| Rust "));
    }

    #[test]
    fn test_no_credentials_in_default_headers() {
        let client = HttpClient::new();
        assert_eq!(client.default_headers().len(), 1);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_unverified_request_is_rejected_before_sending() {
        let client = HttpClient::new();
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            url: "http://127.0.0.1:9/".to_string(),
            body: None,
            body_type: None,
        };

        let result = tokio_test::block_on(client.request(request));
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }

    #[test]
    fn test_parse_response_headers_lowercases_and_groups() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("Content-Type", "text/xml".parse().unwrap());
        headers.append("X-Multi", "a".parse().unwrap());
        headers.append("X-Multi", "b".parse().unwrap());

        let parsed = HttpClient::parse_response_headers(&headers);
        assert_eq!(parsed.get("content-type"), Some(&vec!["text/xml".to_string()]));
        assert_eq!(
            parsed.get("x-multi"),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
    }
}
