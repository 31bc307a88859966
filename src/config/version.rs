//! Seller Center API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Seller Center API to use.

use std::fmt;
use std::str::FromStr;

/// Seller Center API version, sent as the `Version` parameter.
///
/// The API has a single published version, `1.0`. The `Custom` variant
/// exists for regional instances that advertise a different value.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "1.0");
///
/// let version: ApiVersion = "1.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.0
    #[default]
    V1_0,
    /// Custom version string for unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_0
    }

    /// Returns the value transmitted in the `Version` parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1_0 => "1.0",
            Self::Custom(version) => version,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1.0" => Self::V1_0,
            other => Self::Custom(other.to_string()),
        })
    }
}
