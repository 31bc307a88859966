//! Order and order item operations.

use serde_json::Value;

use crate::clients::{extract, take_non_empty, RequestError};
use crate::config::Credential;
use crate::resources::{first_element, Endpoint};
use crate::signing::ParameterSet;

const ORDERS_PATH: &str = "SuccessResponse->Body->Orders";
const ORDER_ITEMS_PATH: &str = "SuccessResponse->Body->OrderItems";
const DOCUMENT_PATH: &str = "SuccessResponse->Body->Document";
const REASONS_PATH: &str = "SuccessResponse->Body->Reasons";
const BODY_PATH: &str = "SuccessResponse->Body";
const HEAD_TIMESTAMP_PATH: &str = "SuccessResponse->Head->Timestamp";

/// Façade for order actions.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use lazada_seller_center::{ParameterSet, SellerCenter};
///
/// let seller_center = SellerCenter::new("https://api.sellercenter.lazada.sg", "seller@example.com", "api-key")?;
///
/// let params = ParameterSet::new()
///     .with("CreatedAfter", Utc::now() - Duration::days(7))
///     .with("Status", "pending")
///     .with("Limit", 50u32);
///
/// if let Some(orders) = seller_center.order().get_orders(params).await? {
///     println!("{orders}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Order {
    endpoint: Endpoint,
}

// Verify Order is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Order>();
};

impl Order {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Returns the credential snapshot this façade signs with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        self.endpoint.credential()
    }

    /// Lists orders (`GetOrders`).
    ///
    /// Accepted parameters include `CreatedBefore`, `CreatedAfter`,
    /// `UpdatedBefore`, `UpdatedAfter`, `Limit`, `Offset`, `Status`,
    /// `SortBy` and `SortDirection`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_orders(&self, parameters: ParameterSet) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetOrders", parameters).await?;
        Ok(take_non_empty(&mut response, ORDERS_PATH))
    }

    /// Fetches a single order by `OrderId` (`GetOrder`).
    ///
    /// Returns the first element of the returned order list.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_order(&self, parameters: ParameterSet) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetOrder", parameters).await?;
        Ok(take_non_empty(&mut response, ORDERS_PATH).and_then(first_element))
    }

    /// Lists the items of an order by `OrderId` (`GetOrderItems`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_order_items(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetOrderItems", parameters).await?;
        Ok(take_non_empty(&mut response, ORDER_ITEMS_PATH))
    }

    /// Cancels an order item (`SetStatusToCanceled`).
    ///
    /// Takes `OrderItemId`, `ReasonId` and an optional `ReasonDetail`.
    /// Returns `true` when the remote acknowledged the request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn set_status_to_canceled(
        &self,
        parameters: ParameterSet,
    ) -> Result<bool, RequestError> {
        let response = self
            .endpoint
            .query("SetStatusToCanceled", parameters)
            .await?;
        Ok(extract(&response, HEAD_TIMESTAMP_PATH).is_some())
    }

    /// Marks order items as packed (`SetStatusToPackedByMarketplace`).
    ///
    /// Takes `OrderItemIds`, `DeliveryType` and `ShippingProvider`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn set_status_to_packed_by_marketplace(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("SetStatusToPackedByMarketplace", parameters)
            .await?;
        Ok(take_non_empty(&mut response, ORDER_ITEMS_PATH))
    }

    /// Marks order items as ready to ship (`SetStatusToReadyToShip`).
    ///
    /// Takes `OrderItemIds`, `DeliveryType`, `ShippingProvider`,
    /// `TrackingNumber` and `SerialNumber`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn set_status_to_ready_to_ship(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("SetStatusToReadyToShip", parameters)
            .await?;
        Ok(take_non_empty(&mut response, ORDER_ITEMS_PATH))
    }

    /// Retrieves an invoice, shipping label or parcel document
    /// (`GetDocument`) for `OrderItemIds` and `DocumentType`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_document(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetDocument", parameters).await?;
        Ok(take_non_empty(&mut response, DOCUMENT_PATH))
    }

    /// Lists the reasons accepted when cancelling or rejecting
    /// (`GetFailureReasons`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_failure_reasons(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("GetFailureReasons", parameters)
            .await?;
        Ok(take_non_empty(&mut response, REASONS_PATH))
    }

    /// Sets the invoice number of an order item (`SetInvoiceNumber`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn set_invoice_number(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("SetInvoiceNumber", parameters)
            .await?;
        Ok(take_non_empty(&mut response, BODY_PATH))
    }
}
