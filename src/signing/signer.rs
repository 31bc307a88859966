//! Canonicalization and signing of request parameters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::signing::hmac::compute_signature;
use crate::signing::parameters::{format_iso8601, ParameterSet};

/// Parameter carrying the API key. Never transmitted.
pub const API_KEY_FIELD: &str = "APIKey";
/// Parameter carrying the derived signature.
pub const SIGNATURE_FIELD: &str = "Signature";
/// Parameter carrying the signing instant.
pub const TIMESTAMP_FIELD: &str = "Timestamp";
/// Parameter carrying the requested response format.
pub const FORMAT_FIELD: &str = "Format";

/// Which request shape a signature is produced for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureVariant {
    /// Signed GET with the parameters as the query string.
    Query,
    /// Signed POST carrying an XML body. Forces `Format=XML`.
    Command,
}

/// A parameter set with its derived `Signature`.
///
/// `fields` holds every transmitted field, `Signature` included. The API key
/// is never part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    fields: BTreeMap<String, String>,
    canonical: String,
    signature: String,
}

impl SignedRequest {
    /// Returns the canonical string the signature was computed over.
    #[must_use]
    pub fn canonical_string(&self) -> &str {
        &self.canonical
    }

    /// Returns the percent-encoded signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns all transmitted fields, including `Signature`.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Returns a transmitted field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the full query string: the canonical string followed by
    /// `&Signature=<digest>`.
    ///
    /// This string is used verbatim as the URL query, so the server sees
    /// exactly the encoding that was signed.
    #[must_use]
    pub fn query_string(&self) -> String {
        if self.canonical.is_empty() {
            format!("{SIGNATURE_FIELD}={}", self.signature)
        } else {
            format!("{}&{SIGNATURE_FIELD}={}", self.canonical, self.signature)
        }
    }

    /// Returns `<base_url>?<query_string>`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}?{}", self.query_string())
    }
}

/// Strict "raw" percent-encoding: only `A-Z a-z 0-9 - _ . ~` pass through,
/// a space becomes `%20`.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::signing::percent_encode;
///
/// assert_eq!(percent_encode("a b+c"), "a%20b%2Bc");
/// ```
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the canonical string: fields in ascending key order, each key and
/// value percent-encoded, joined as `key=value` pairs with `&`.
#[must_use]
pub fn canonical_string(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs `parameters` with `secret` at the current instant.
///
/// See [`sign_at`] for the procedure.
#[must_use]
pub fn sign(parameters: &ParameterSet, secret: &str, variant: SignatureVariant) -> SignedRequest {
    sign_at(parameters, secret, variant, Utc::now())
}

/// Signs `parameters` with `secret` using a fixed `timestamp`.
///
/// 1. `Timestamp` is set to `timestamp` (replacing any caller value).
/// 2. For [`SignatureVariant::Command`], `Format` is forced to `XML`.
/// 3. `APIKey` and any caller-supplied `Signature` are removed.
/// 4. The canonical string is built and signed with HMAC-SHA256.
/// 5. The percent-encoded hex digest is attached as `Signature`.
///
/// Signing is a pure function of its inputs.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use lazada_seller_center::signing::{sign_at, SignatureVariant};
/// use lazada_seller_center::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("Action", "GetOrders")
///     .with("APIKey", "secret")
///     .with("UserID", "u1");
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
///
/// let signed = sign_at(&params, "secret", SignatureVariant::Query, at);
/// assert_eq!(
///     signed.canonical_string(),
///     "Action=GetOrders&Timestamp=2024-01-02T03%3A04%3A05%2B00%3A00&UserID=u1"
/// );
/// assert!(signed.get("APIKey").is_none());
/// ```
#[must_use]
pub fn sign_at(
    parameters: &ParameterSet,
    secret: &str,
    variant: SignatureVariant,
    timestamp: DateTime<Utc>,
) -> SignedRequest {
    let mut fields = parameters.to_wire_fields();

    fields.insert(
        TIMESTAMP_FIELD.to_string(),
        format_iso8601(&timestamp.into()),
    );
    if variant == SignatureVariant::Command {
        fields.insert(FORMAT_FIELD.to_string(), "XML".to_string());
    }

    fields.remove(API_KEY_FIELD);
    fields.remove(SIGNATURE_FIELD);

    let canonical = canonical_string(&fields);
    let signature = percent_encode(&compute_signature(&canonical, secret));

    fields.insert(SIGNATURE_FIELD.to_string(), signature.clone());

    SignedRequest {
        fields,
        canonical,
        signature,
    }
}
