//! The Seller Center client root.

use crate::clients::HttpClient;
use crate::config::{ApiKey, BaseUrl, Credential, UserId};
use crate::error::ConfigError;
use crate::resources::{Endpoint, Order, Product, QualityControl, ShipmentProvider};

/// Entry point to the Seller Center API.
///
/// Owns the [`Credential`] and one shared [`HttpClient`]. Façades returned by
/// [`order`](Self::order), [`product`](Self::product),
/// [`quality_control`](Self::quality_control) and
/// [`shipment_provider`](Self::shipment_provider) capture the credential as
/// it is when they are created; setters only affect façades created
/// afterwards.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::SellerCenter;
///
/// let seller_center = SellerCenter::new(
///     "https://api.sellercenter.lazada.sg",
///     "seller@example.com",
///     "api-key",
/// )
/// .unwrap();
///
/// assert_eq!(seller_center.user_id().as_ref(), "seller@example.com");
/// let orders = seller_center.order();
/// # let _ = orders;
/// ```
#[derive(Clone, Debug)]
pub struct SellerCenter {
    credential: Credential,
    http: HttpClient,
}

// Verify SellerCenter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SellerCenter>();
};

impl SellerCenter {
    /// Creates a client with the default API version and output format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if any argument is empty,
    /// or [`ConfigError::InvalidBaseUrl`] if `base_url` is not an
    /// `http`/`https` URL with a host.
    pub fn new(
        base_url: impl Into<String>,
        user_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let credential = Credential::builder()
            .base_url(BaseUrl::new(base_url)?)
            .user_id(UserId::new(user_id)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Ok(Self::from_credential(credential))
    }

    /// Creates a client from a fully built credential.
    #[must_use]
    pub fn from_credential(credential: Credential) -> Self {
        Self {
            credential,
            http: HttpClient::new(),
        }
    }

    /// Returns the current credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.credential.base_url()
    }

    /// Returns the user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        self.credential.user_id()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        self.credential.api_key()
    }

    /// Replaces the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `base_url` is empty or invalid; the
    /// current value is kept in that case.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<(), ConfigError> {
        self.credential = self.credential.with_base_url(BaseUrl::new(base_url)?);
        Ok(())
    }

    /// Replaces the user ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if `user_id` is empty.
    pub fn set_user_id(&mut self, user_id: impl Into<String>) -> Result<(), ConfigError> {
        self.credential = self.credential.with_user_id(UserId::new(user_id)?);
        Ok(())
    }

    /// Replaces the API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if `api_key` is empty.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<(), ConfigError> {
        self.credential = self.credential.with_api_key(ApiKey::new(api_key)?);
        Ok(())
    }

    /// Returns an order façade bound to the current credential.
    #[must_use]
    pub fn order(&self) -> Order {
        Order::new(self.endpoint())
    }

    /// Returns a product façade bound to the current credential.
    #[must_use]
    pub fn product(&self) -> Product {
        Product::new(self.endpoint())
    }

    /// Returns a quality control façade bound to the current credential.
    #[must_use]
    pub fn quality_control(&self) -> QualityControl {
        QualityControl::new(self.endpoint())
    }

    /// Returns a shipment provider façade bound to the current credential.
    #[must_use]
    pub fn shipment_provider(&self) -> ShipmentProvider {
        ShipmentProvider::new(self.endpoint())
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.credential.clone(), self.http.clone())
    }
}
