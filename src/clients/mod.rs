//! HTTP client types for Seller Center API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client, shared by every invoker
//! - [`HttpRequest`] / [`HttpResponse`]: a request and the raw exchange
//! - [`QueryInvoker`]: signed GET, JSON or XML response
//! - [`CommandInvoker`]: signed POST with an XML body, XML response
//! - [`extract`]: `A->B->C` path walk over decoded responses
//! - [`RequestError`]: everything a call can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use lazada_seller_center::clients::{extract, HttpClient, QueryInvoker};
//! use lazada_seller_center::ParameterSet;
//!
//! let invoker = QueryInvoker::new(HttpClient::new());
//! let params = ParameterSet::new()
//!     .with("Action", "GetBrands")
//!     .with("UserID", "seller@example.com")
//!     .with("Version", "1.0")
//!     .with("Format", "JSON");
//!
//! let response = invoker
//!     .call("https://api.sellercenter.lazada.sg", &params, "api-key")
//!     .await?;
//! let brands = extract(&response, "SuccessResponse->Body->Brands");
//! ```
//!
//! # Failure Handling
//!
//! There are no automatic retries. Queries turn undecodable responses into
//! [`RequestError::TransportFailure`]; commands hand them back verbatim as
//! [`RequestError::Undelivered`].

pub mod command;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod query;
mod response;

pub use command::CommandInvoker;
pub use errors::{HttpError, InvalidHttpRequestError, RawResponse, RequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::QueryInvoker;
pub use response::{extract, PATH_SEPARATOR};

pub(crate) use response::take_non_empty;
