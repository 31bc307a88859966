//! Signed GET requests.
//!
//! The response is decoded as JSON when its own `Content-Type` names a JSON
//! media type, as XML otherwise, then checked for the
//! `ErrorResponse->Head->ErrorMessage` envelope.

use serde_json::Value;

use crate::clients::errors::{HttpError, RequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::response::extract_text;
use crate::codec::decode_body;
use crate::signing::{sign, ParameterSet, SignatureVariant, SignedRequest};

/// Path of the error message in a query error envelope.
pub const QUERY_ERROR_MESSAGE_PATH: &str = "ErrorResponse->Head->ErrorMessage";
/// Path of the error code in a query error envelope.
pub const QUERY_ERROR_CODE_PATH: &str = "ErrorResponse->Head->ErrorCode";

/// Sends signed GET requests and normalizes their responses.
#[derive(Clone, Debug)]
pub struct QueryInvoker {
    http: HttpClient,
}

// Verify QueryInvoker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryInvoker>();
};

impl QueryInvoker {
    /// Creates an invoker over a shared HTTP client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Signs `parameters` with `secret` and sends them as a GET to `base_url`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Http`] when no HTTP response is received
    /// - [`RequestError::TransportFailure`] when the body cannot be decoded
    /// - [`RequestError::ApiError`] when the remote returns an error envelope
    pub async fn call(
        &self,
        base_url: &str,
        parameters: &ParameterSet,
        secret: &str,
    ) -> Result<Value, RequestError> {
        let signed = sign(parameters, secret, SignatureVariant::Query);
        self.send(base_url, &signed).await
    }

    /// Sends an already signed request as a GET to `base_url`.
    ///
    /// # Errors
    ///
    /// See [`QueryInvoker::call`].
    pub async fn send(&self, base_url: &str, signed: &SignedRequest) -> Result<Value, RequestError> {
        tracing::debug!(
            "Sending GET request for action {}",
            signed.get("Action").unwrap_or("<none>")
        );

        let request = HttpRequest::builder(HttpMethod::Get, signed.url(base_url))
            .build()
            .map_err(HttpError::from)?;
        let response = self.http.request(request).await?;

        normalize(&response)
    }
}

/// Classifies a GET response.
///
/// # Errors
///
/// - [`RequestError::TransportFailure`] when the body has no usable
///   structure, or the status is not 2xx and no error envelope is present
/// - [`RequestError::ApiError`] when `ErrorResponse->Head->ErrorMessage`
///   is present
pub fn normalize(response: &HttpResponse) -> Result<Value, RequestError> {
    let Some(document) = decode_body(&response.body, response.content_type()) else {
        return Err(RequestError::TransportFailure {
            status: response.code,
        });
    };

    if let Some(message) = extract_text(&document, QUERY_ERROR_MESSAGE_PATH) {
        let code = extract_text(&document, QUERY_ERROR_CODE_PATH);
        tracing::warn!("Seller Center rejected query: {}", message);
        return Err(RequestError::ApiError { message, code });
    }

    if !response.is_ok() {
        return Err(RequestError::TransportFailure {
            status: response.code,
        });
    }

    Ok(document)
}
