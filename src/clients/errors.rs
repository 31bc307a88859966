//! Error types for Seller Center requests.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: transport-level failures (validation or network)
//! - [`RequestError`]: everything a façade call can fail with, including the
//!   API-level errors decoded from response envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use lazada_seller_center::RequestError;
//!
//! match seller_center.order().get_orders(params).await {
//!     Ok(orders) => println!("Orders: {orders:?}"),
//!     Err(RequestError::ApiError { message, .. }) => println!("Rejected: {message}"),
//!     Err(RequestError::DetailedApiError { message, errors, .. }) => {
//!         println!("Rejected: {message} ({errors})");
//!     }
//!     Err(RequestError::TransportFailure { status }) => println!("Undecodable response ({status})"),
//!     Err(RequestError::Undelivered(raw)) => println!("Not processed: {}", raw.body),
//!     Err(other) => println!("Error: {other}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::HttpResponse;
use crate::codec::XmlError;

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent, for example when a POST has no body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error: no HTTP response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// The raw outcome of a command request that the remote did not process.
///
/// Kept verbatim so callers can inspect what came back: a non-2xx response,
/// a body that is not XML, or (with `status` unset) a connection failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Response headers (lowercased names).
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
    /// Connection error description when no response was received.
    pub reason: Option<String>,
}

impl RawResponse {
    pub(crate) fn from_network_error(error: &reqwest::Error) -> Self {
        Self {
            status: error.status().map(|status| status.as_u16()),
            reason: Some(error.to_string()),
            ..Self::default()
        }
    }
}

impl From<HttpResponse> for RawResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: Some(response.code),
            headers: response.headers,
            body: response.body,
            reason: None,
        }
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, &self.reason) {
            (_, Some(reason)) => write!(f, "{reason}"),
            (Some(status), None) => write!(f, "HTTP status {status}"),
            (None, None) => f.write_str("no response"),
        }
    }
}

/// Errors returned by Seller Center calls.
///
/// API-level variants carry the remote message unchanged.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The response body could not be decoded into a usable structure.
    #[error("HTTP request failed (status {status}): the response body could not be decoded.")]
    TransportFailure {
        /// HTTP status code of the undecodable response.
        status: u16,
    },

    /// The remote reported a single error message.
    #[error("{message}")]
    ApiError {
        /// The remote error message.
        message: String,
        /// The remote error code (`Head->ErrorCode`), when present.
        code: Option<String>,
    },

    /// The remote reported a message plus a structured list of field errors.
    #[error("{message}")]
    DetailedApiError {
        /// The remote error message.
        message: String,
        /// The remote error code (`Head->ErrorCode`), when present.
        code: Option<String>,
        /// The `Body->Errors` structure, as decoded.
        errors: Value,
    },

    /// A command request was not processed by the remote.
    #[error("Command request was not processed: {0}")]
    Undelivered(RawResponse),

    /// The caller-supplied XML request body is malformed.
    #[error("Invalid XML request body: {0}")]
    InvalidXmlBody(#[from] XmlError),

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RequestError {
    /// Returns the remote error message for API-level errors.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } | Self::DetailedApiError { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Returns the structured field errors of a [`RequestError::DetailedApiError`].
    #[must_use]
    pub const fn field_errors(&self) -> Option<&Value> {
        match self {
            Self::DetailedApiError { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_displays_remote_message_verbatim() {
        let error = RequestError::ApiError {
            message: "E009: Access Denied".to_string(),
            code: Some("9".to_string()),
        };
        assert_eq!(error.to_string(), "E009: Access Denied");
        assert_eq!(error.api_message(), Some("E009: Access Denied"));
        assert!(error.field_errors().is_none());
    }

    #[test]
    fn test_detailed_api_error_exposes_field_errors() {
        let error = RequestError::DetailedApiError {
            message: "E201: Invalid request".to_string(),
            code: None,
            errors: json!({"ErrorDetail": {"Field": "Price"}}),
        };
        assert_eq!(error.to_string(), "E201: Invalid request");
        assert_eq!(
            error.field_errors(),
            Some(&json!({"ErrorDetail": {"Field": "Price"}}))
        );
    }

    #[test]
    fn test_transport_failure_has_no_remote_message() {
        let error = RequestError::TransportFailure { status: 502 };
        assert!(error.api_message().is_none());
        assert!(error.to_string().contains("502"));
    }

    #[test]
    fn test_raw_response_from_http_response() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["text/html".to_string()]);
        let raw = RawResponse::from(HttpResponse::new(503, headers, "busy".to_string()));

        assert_eq!(raw.status, Some(503));
        assert_eq!(raw.body, "busy");
        assert_eq!(raw.to_string(), "HTTP status 503");
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _: &dyn std::error::Error = &RequestError::TransportFailure { status: 500 };
    }
}
