//! Shipment providers available to the seller.

use serde_json::Value;

use crate::clients::{take_non_empty, RequestError};
use crate::config::Credential;
use crate::resources::Endpoint;
use crate::signing::ParameterSet;

const SHIPMENT_PROVIDERS_PATH: &str = "SuccessResponse->Body->ShipmentProviders";

/// Façade for shipment provider actions.
#[derive(Clone, Debug)]
pub struct ShipmentProvider {
    endpoint: Endpoint,
}

// Verify ShipmentProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipmentProvider>();
};

impl ShipmentProvider {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Returns the credential snapshot this façade signs with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        self.endpoint.credential()
    }

    /// Lists the shipment providers usable with
    /// `SetStatusToPackedByMarketplace` (`GetShipmentProviders`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_shipment_providers(&self) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("GetShipmentProviders", ParameterSet::new())
            .await?;
        Ok(take_non_empty(&mut response, SHIPMENT_PROVIDERS_PATH))
    }
}
