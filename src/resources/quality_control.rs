//! Quality control status of listings.

use serde_json::Value;

use crate::clients::{take_non_empty, RequestError};
use crate::config::Credential;
use crate::resources::Endpoint;
use crate::signing::ParameterSet;

const STATUS_PATH: &str = "SuccessResponse->Body->Status";

/// Façade for quality control actions.
#[derive(Clone, Debug)]
pub struct QualityControl {
    endpoint: Endpoint,
}

// Verify QualityControl is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QualityControl>();
};

impl QualityControl {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Returns the credential snapshot this façade signs with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        self.endpoint.credential()
    }

    /// Returns the QC status of listings (`GetQcStatus`), filtered by
    /// `SkuSellerList` and paged by `Offset` and `Limit`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_qc_status(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetQcStatus", parameters).await?;
        Ok(take_non_empty(&mut response, STATUS_PATH))
    }
}
