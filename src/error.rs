//! Error types for the Seller Center SDK.
//!
//! This module contains the configuration errors raised while constructing a
//! [`Credential`](crate::Credential) or a [`SellerCenter`](crate::SellerCenter)
//! client. Request-time failures live in [`RequestError`](crate::RequestError).
//!
//! # Example
//!
//! ```rust
//! use lazada_seller_center::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::MissingCredential { field: "api_key" })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required credential field is missing or empty.
    #[error("Missing credential: '{field}'. baseURL, userID and apiKey must be provided.")]
    MissingCredential {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.sellercenter.lazada.sg').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_error_message() {
        let error = ConfigError::MissingCredential { field: "user_id" };
        let message = error.to_string();
        assert!(message.contains("user_id"));
        assert!(message.contains("must be provided"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingCredential { field: "api_key" };
        let _: &dyn std::error::Error = &error;
    }
}
