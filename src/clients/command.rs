//! Signed POST requests carrying an XML body.
//!
//! Commands always request `Format=XML`. A response is only classified once
//! it is a 2xx carrying well-formed XML; anything else is handed back to the
//! caller as [`RequestError::Undelivered`] with the raw exchange.
//!
//! # Classification Order
//!
//! 1. `ErrorResponse->Head->ErrorMessage`: [`RequestError::ApiError`]
//! 2. `Head->ErrorMessage` with `Body->Errors`: [`RequestError::DetailedApiError`]
//! 3. `Head->ErrorMessage`: [`RequestError::ApiError`]
//! 4. Otherwise the decoded document is the payload.

use serde_json::Value;

use crate::clients::errors::{HttpError, RawResponse, RequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::{QUERY_ERROR_CODE_PATH, QUERY_ERROR_MESSAGE_PATH};
use crate::clients::response::{extract, extract_text};
use crate::codec::xml;
use crate::signing::{sign, ParameterSet, SignatureVariant, SignedRequest};

const HEAD_ERROR_MESSAGE_PATH: &str = "Head->ErrorMessage";
const HEAD_ERROR_CODE_PATH: &str = "Head->ErrorCode";
const BODY_ERRORS_PATH: &str = "Body->Errors";

/// Sends signed POST requests with an XML body and normalizes their responses.
#[derive(Clone, Debug)]
pub struct CommandInvoker {
    http: HttpClient,
}

// Verify CommandInvoker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommandInvoker>();
};

impl CommandInvoker {
    /// Creates an invoker over a shared HTTP client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Signs `parameters` with `secret` (forcing `Format=XML`) and POSTs
    /// `body` to `base_url`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Undelivered`] on connection errors, non-2xx statuses
    ///   or bodies that are not XML
    /// - [`RequestError::ApiError`] / [`RequestError::DetailedApiError`] when
    ///   the remote returns an error envelope
    pub async fn call(
        &self,
        base_url: &str,
        parameters: &ParameterSet,
        secret: &str,
        body: &str,
    ) -> Result<Value, RequestError> {
        let signed = sign(parameters, secret, SignatureVariant::Command);
        self.send(base_url, &signed, body).await
    }

    /// POSTs `body` to `base_url` with an already signed query.
    ///
    /// # Errors
    ///
    /// See [`CommandInvoker::call`].
    pub async fn send(
        &self,
        base_url: &str,
        signed: &SignedRequest,
        body: &str,
    ) -> Result<Value, RequestError> {
        tracing::debug!(
            "Sending POST request for action {}",
            signed.get("Action").unwrap_or("<none>")
        );

        let request = HttpRequest::builder(HttpMethod::Post, signed.url(base_url))
            .body(body)
            .body_type(DataType::Xml)
            .build()
            .map_err(HttpError::from)?;

        let response = match self.http.request(request).await {
            Ok(response) => response,
            Err(HttpError::Network(error)) => {
                let raw = RawResponse::from_network_error(&error);
                tracing::warn!("Command request was not delivered: {}", raw);
                return Err(RequestError::Undelivered(raw));
            }
            Err(other) => return Err(other.into()),
        };

        normalize(response)
    }
}

/// Classifies a POST response.
///
/// # Errors
///
/// - [`RequestError::Undelivered`] when the status is not 2xx or the body is
///   not well-formed XML
/// - [`RequestError::ApiError`] / [`RequestError::DetailedApiError`] per the
///   classification order
pub fn normalize(response: HttpResponse) -> Result<Value, RequestError> {
    if !response.is_ok() {
        tracing::warn!("Command request was not processed: HTTP status {}", response.code);
        return Err(RequestError::Undelivered(response.into()));
    }

    let document = match xml::parse_document(&response.body) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!("Command response is not XML: {}", error);
            return Err(RequestError::Undelivered(response.into()));
        }
    };

    let outcome = classify(document);
    if let Err(error) = &outcome {
        tracing::warn!("Seller Center rejected command: {}", error);
    }
    outcome
}

fn classify(document: Value) -> Result<Value, RequestError> {
    if let Some(message) = extract_text(&document, QUERY_ERROR_MESSAGE_PATH) {
        return Err(RequestError::ApiError {
            message,
            code: extract_text(&document, QUERY_ERROR_CODE_PATH),
        });
    }

    if let Some(message) = extract_text(&document, HEAD_ERROR_MESSAGE_PATH) {
        let code = extract_text(&document, HEAD_ERROR_CODE_PATH);
        return Err(match extract(&document, BODY_ERRORS_PATH) {
            Some(errors) => RequestError::DetailedApiError {
                message,
                code,
                errors: errors.clone(),
            },
            None => RequestError::ApiError { message, code },
        });
    }

    Ok(document)
}
