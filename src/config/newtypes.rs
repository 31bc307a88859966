//! Validated newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Seller Center user ID (the seller account e-mail).
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::UserId;
///
/// let user = UserId::new("seller@example.com").unwrap();
/// assert_eq!(user.as_ref(), "seller@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    /// Creates a new validated user ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the user ID is empty.
    pub fn new(user_id: impl Into<String>) -> Result<Self, ConfigError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential { field: "user_id" });
        }
        Ok(Self(user_id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Seller Center API key.
///
/// The key is the HMAC signing secret. It is never transmitted and its
/// `Debug` output is masked to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::ApiKey;
///
/// let key = ApiKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingCredential { field: "api_key" });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Seller Center API base URL.
///
/// Only `http` and `https` URLs with a non-empty host are accepted. A
/// trailing slash is kept as given, since the API endpoint is the URL itself.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::BaseUrl;
///
/// let url = BaseUrl::new("https://api.sellercenter.lazada.sg").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.sellercenter.lazada.sg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the URL is empty and
    /// [`ConfigError::InvalidBaseUrl`] if it has no `http(s)` scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        if url.is_empty() {
            return Err(ConfigError::MissingCredential { field: "base_url" });
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // The signed query string is appended with '?', so the base URL cannot carry one.
        if url.contains('?') || url.contains('#') {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Response format requested from the Seller Center API.
///
/// Read operations honour this setting. Command (POST) operations always
/// request `XML`, because the remote endpoints only accept it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    /// JSON responses (the default).
    #[default]
    Json,
    /// XML responses.
    Xml,
}

impl OutputFormat {
    /// Returns the value transmitted in the `Format` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
