//! Credential types for the Seller Center SDK.
//!
//! This module provides the identity every request is signed and sent with.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Credential`]: The immutable identity snapshot shared by all façades
//! - [`CredentialBuilder`]: A builder for constructing [`Credential`] instances
//! - [`BaseUrl`]: A validated API endpoint URL
//! - [`UserId`]: A validated seller user ID
//! - [`ApiKey`]: A validated signing secret with masked debug output
//! - [`ApiVersion`]: The API version to send
//! - [`OutputFormat`]: The response format requested for read operations
//!
//! # Example
//!
//! ```rust
//! use lazada_seller_center::{ApiKey, BaseUrl, Credential, UserId};
//!
//! let credential = Credential::builder()
//!     .base_url(BaseUrl::new("https://api.sellercenter.lazada.sg").unwrap())
//!     .user_id(UserId::new("seller@example.com").unwrap())
//!     .api_key(ApiKey::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl, OutputFormat, UserId};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default Seller Center endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.sellercenter.lazada.sg";

/// Identity used to sign and address every Seller Center request.
///
/// A `Credential` is immutable. Façades take a snapshot of it when they are
/// created; later changes made through
/// [`SellerCenter`](crate::SellerCenter) setters only affect façades created
/// afterwards.
///
/// # Thread Safety
///
/// `Credential` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct Credential {
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_id: UserId,
    api_key: ApiKey,
    output_format: OutputFormat,
}

impl Credential {
    /// Creates a new builder for constructing a `Credential`.
    #[must_use]
    pub fn builder() -> CredentialBuilder {
        CredentialBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the output format for read operations.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub(crate) fn with_base_url(&self, base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..self.clone()
        }
    }

    pub(crate) fn with_user_id(&self, user_id: UserId) -> Self {
        Self {
            user_id,
            ..self.clone()
        }
    }

    pub(crate) fn with_api_key(&self, api_key: ApiKey) -> Self {
        Self {
            api_key,
            ..self.clone()
        }
    }
}

// Verify Credential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credential>();
};

/// Builder for constructing [`Credential`] instances.
///
/// Required fields are `user_id` and `api_key`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `api_version`: [`ApiVersion::latest`]
/// - `output_format`: [`OutputFormat::Json`]
#[derive(Debug, Default)]
pub struct CredentialBuilder {
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_id: Option<UserId>,
    api_key: Option<ApiKey>,
    output_format: Option<OutputFormat>,
}

impl CredentialBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user ID (required).
    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the output format for read operations.
    #[must_use]
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Builds the [`Credential`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if `user_id` or `api_key`
    /// are not set.
    pub fn build(self) -> Result<Credential, ConfigError> {
        let user_id = self
            .user_id
            .ok_or(ConfigError::MissingCredential { field: "user_id" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingCredential { field: "api_key" })?;
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(Credential {
            base_url,
            api_version: self.api_version.unwrap_or_default(),
            user_id,
            api_key,
            output_format: self.output_format.unwrap_or_default(),
        })
    }
}
