//! Product operations.
//!
//! Reads are signed GETs. Mutations send an XML request document, which is
//! validated and pretty-printed before it is signed and POSTed; a malformed
//! document fails with [`RequestError::InvalidXmlBody`] without any request
//! being made.

use serde_json::Value;

use crate::clients::{take_non_empty, RequestError};
use crate::codec::xml;
use crate::config::Credential;
use crate::resources::Endpoint;
use crate::signing::ParameterSet;

const PRODUCTS_PATH: &str = "SuccessResponse->Body->Products";
const SPUS_PATH: &str = "SuccessResponse->Body->SPUs";
const BRANDS_PATH: &str = "SuccessResponse->Body->Brands";
const BODY_PATH: &str = "SuccessResponse->Body";
const IMAGE_PATH: &str = "Body->Image";
const HEAD_PATH: &str = "Head";

/// Façade for product actions.
///
/// # Example
///
/// ```rust,ignore
/// use lazada_seller_center::{ParameterSet, SellerCenter};
///
/// let product = seller_center.product();
///
/// let found = product
///     .get_products(ParameterSet::new().with("SkuSellerList", vec!["sku-1", "sku-2"]))
///     .await?;
///
/// let head = product
///     .update_price_quantity(
///         "<Request><Product><Skus><Sku><SellerSku>sku-1</SellerSku>\
///          <Quantity>10</Quantity></Sku></Skus></Product></Request>",
///     )
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Product {
    endpoint: Endpoint,
}

// Verify Product is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Product>();
};

impl Product {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Returns the credential snapshot this façade signs with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        self.endpoint.credential()
    }

    /// Lists products (`GetProducts`).
    ///
    /// Accepted parameters include the date filters, `Search`, `Filter`,
    /// `Limit`, `Offset`, `Options` and `SkuSellerList`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_products(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetProducts", parameters).await?;
        Ok(take_non_empty(&mut response, PRODUCTS_PATH))
    }

    /// Searches SPUs by `CategoryId` and keywords (`SearchSPUs`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn search_spus(&self, parameters: ParameterSet) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("SearchSPUs", parameters).await?;
        Ok(take_non_empty(&mut response, SPUS_PATH))
    }

    /// Lists brands, paged by `Offset` and `Limit` (`GetBrands`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_brands(&self, parameters: ParameterSet) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.query("GetBrands", parameters).await?;
        Ok(take_non_empty(&mut response, BRANDS_PATH))
    }

    /// Returns the full category tree (`GetCategoryTree`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_category_tree(&self) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("GetCategoryTree", ParameterSet::new())
            .await?;
        Ok(take_non_empty(&mut response, BODY_PATH))
    }

    /// Returns the attributes of a `PrimaryCategory`
    /// (`GetCategoryAttributes`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the remote rejects it.
    pub async fn get_category_attributes(
        &self,
        parameters: ParameterSet,
    ) -> Result<Option<Value>, RequestError> {
        let mut response = self
            .endpoint
            .query("GetCategoryAttributes", parameters)
            .await?;
        Ok(take_non_empty(&mut response, BODY_PATH))
    }

    /// Uploads an image described by an XML request document (`UploadImage`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn upload_image(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.command("UploadImage", xml).await?;
        Ok(take_non_empty(&mut response, IMAGE_PATH))
    }

    /// Copies an externally hosted image into Seller Center (`MigrateImage`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the command fails.
    pub async fn migrate_image(&self, url: &str) -> Result<Option<Value>, RequestError> {
        let body = xml::image_url_request(url);
        let mut response = self.endpoint.command("MigrateImage", &body).await?;
        Ok(take_non_empty(&mut response, IMAGE_PATH))
    }

    /// Creates a product from an XML request document (`CreateProduct`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn create_product(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        self.head_of("CreateProduct", xml).await
    }

    /// Updates attributes or SKUs of an existing product (`UpdateProduct`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn update_product(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        self.head_of("UpdateProduct", xml).await
    }

    /// Associates image URLs with product SKUs (`SetImages`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn set_images(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        self.head_of("SetImages", xml).await
    }

    /// Updates price and quantity of one or more SKUs
    /// (`UpdatePriceQuantity`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn update_price_quantity(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        self.head_of("UpdatePriceQuantity", xml).await
    }

    /// Removes some or all SKUs of a product (`RemoveProduct`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidXmlBody`] if `xml` is malformed, or
    /// another [`RequestError`] if the command fails.
    pub async fn remove_product(&self, xml: &str) -> Result<Option<Value>, RequestError> {
        self.head_of("RemoveProduct", xml).await
    }

    async fn head_of(&self, action: &str, xml: &str) -> Result<Option<Value>, RequestError> {
        let mut response = self.endpoint.command(action, xml).await?;
        Ok(take_non_empty(&mut response, HEAD_PATH))
    }
}
