//! Request signing for the Seller Center API.
//!
//! Every request carries a `Signature` parameter: the lowercase hex
//! HMAC-SHA256 of the canonical query string, keyed by the API key.
//!
//! # Canonical String
//!
//! 1. A `Timestamp` (ISO-8601, numeric offset) is added at signing time.
//! 2. `APIKey` is removed; it is the signing key, not a transmitted field.
//! 3. Fields are sorted by key in byte order.
//! 4. Keys and values are raw percent-encoded and joined as `key=value&...`.
//!
//! Command (POST) requests additionally force `Format=XML` before signing.
//!
//! # Example
//!
//! ```rust
//! use lazada_seller_center::signing::{sign, SignatureVariant};
//! use lazada_seller_center::ParameterSet;
//!
//! let params = ParameterSet::new()
//!     .with("Action", "GetOrders")
//!     .with("UserID", "seller@example.com")
//!     .with("Version", "1.0");
//!
//! let signed = sign(&params, "my-api-key", SignatureVariant::Query);
//! assert!(signed.query_string().contains("&Signature="));
//! ```

mod hmac;
mod parameters;
mod signer;

pub use hmac::compute_signature;
pub use parameters::{format_iso8601, ParamValue, ParameterSet, DATE_FILTER_KEYS};
pub use signer::{
    canonical_string, percent_encode, sign, sign_at, SignatureVariant, SignedRequest,
    API_KEY_FIELD, FORMAT_FIELD, SIGNATURE_FIELD, TIMESTAMP_FIELD,
};
