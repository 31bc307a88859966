//! Resource façades for the Seller Center API.
//!
//! Each façade wraps one resource family with one async method per remote
//! action:
//!
//! - [`Order`]: order and order item lookups, status transitions, documents
//! - [`Product`]: product reads and XML-bodied product mutations
//! - [`QualityControl`]: listing QC status
//! - [`ShipmentProvider`]: available shipment providers
//!
//! Façades are obtained from [`SellerCenter`](crate::SellerCenter) and hold
//! a snapshot of its [`Credential`]. Every call builds its own parameter set,
//! so a single façade can be shared across concurrent tasks.
//!
//! Methods return `Ok(None)` when the documented field is absent from the
//! response or is empty.

mod order;
mod product;
mod quality_control;
mod shipment_provider;

pub use order::Order;
pub use product::Product;
pub use quality_control::QualityControl;
pub use shipment_provider::ShipmentProvider;

use serde_json::Value;

use crate::clients::{CommandInvoker, HttpClient, QueryInvoker, RequestError};
use crate::codec::xml;
use crate::config::Credential;
use crate::signing::{ParameterSet, API_KEY_FIELD, FORMAT_FIELD};

/// Parameter naming the remote action.
pub const ACTION_FIELD: &str = "Action";
/// Parameter naming the seller account.
pub const USER_ID_FIELD: &str = "UserID";
/// Parameter naming the API version.
pub const VERSION_FIELD: &str = "Version";

/// Credential snapshot plus the invokers a façade sends through.
#[derive(Clone, Debug)]
pub(crate) struct Endpoint {
    credential: Credential,
    query: QueryInvoker,
    command: CommandInvoker,
}

impl Endpoint {
    pub(crate) fn new(credential: Credential, http: HttpClient) -> Self {
        Self {
            credential,
            query: QueryInvoker::new(http.clone()),
            command: CommandInvoker::new(http),
        }
    }

    pub(crate) const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Identity fields and `Action`, overlaid with the caller's parameters.
    pub(crate) fn parameters(&self, action: &str, caller: ParameterSet) -> ParameterSet {
        let credential = &self.credential;
        let user_id: &str = credential.user_id().as_ref();
        let api_key: &str = credential.api_key().as_ref();
        let mut parameters = ParameterSet::new()
            .with(USER_ID_FIELD, user_id)
            .with(VERSION_FIELD, credential.api_version().as_str())
            .with(FORMAT_FIELD, credential.output_format().as_str())
            .with(API_KEY_FIELD, api_key)
            .with(ACTION_FIELD, action);
        parameters.merge(caller.with_dates_as_text());
        parameters
    }

    pub(crate) async fn query(
        &self,
        action: &str,
        caller: ParameterSet,
    ) -> Result<Value, RequestError> {
        let parameters = self.parameters(action, caller);
        self.query
            .call(
                self.credential.base_url().as_ref(),
                &parameters,
                self.credential.api_key().as_ref(),
            )
            .await
    }

    /// Pretty-prints `body` and sends it as a command.
    pub(crate) async fn command(&self, action: &str, body: &str) -> Result<Value, RequestError> {
        let body = xml::pretty_print(body)?;
        let parameters = self.parameters(action, ParameterSet::new());
        self.command
            .call(
                self.credential.base_url().as_ref(),
                &parameters,
                self.credential.api_key().as_ref(),
                &body,
            )
            .await
    }
}

/// Returns the first element of a sequence, or `None`.
///
/// XML output wraps sequences in a single child element: `<Orders><Order>`
/// decodes to `{"Order": {...}}` for one entry and `{"Order": [...]}` for
/// several. Both are treated as sequences here.
pub(crate) fn first_element(value: Value) -> Option<Value> {
    match value {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(wrapper) if wrapper.len() == 1 => match wrapper.into_iter().next() {
            Some((_, Value::Array(items))) => items.into_iter().next(),
            Some((_, entry @ Value::Object(_))) => Some(entry),
            _ => None,
        },
        _ => None,
    }
}
