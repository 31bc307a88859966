//! # Lazada Seller Center Rust SDK
//!
//! An async client for the Lazada Seller Center API: signed requests,
//! JSON/XML response normalization and typed errors, with one façade per
//! resource family.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Credential`] and [`CredentialBuilder`]
//! - Validated newtypes for the base URL, user ID and API key
//! - HMAC-SHA256 request signing via [`signing`]
//! - Signed GET queries and XML-bodied POST commands via [`clients`]
//! - Order, product, quality control and shipment provider façades via
//!   [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lazada_seller_center::SellerCenter;
//!
//! let seller_center = SellerCenter::new(
//!     "https://api.sellercenter.lazada.sg",
//!     "seller@example.com",
//!     "your-api-key",
//! )
//! .unwrap();
//! # let _ = seller_center;
//! ```
//!
//! ## Reading Orders
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use lazada_seller_center::{ParameterSet, RequestError, SellerCenter};
//!
//! let seller_center = SellerCenter::new("https://api.sellercenter.lazada.sg", "seller@example.com", "key")?;
//!
//! let params = ParameterSet::new()
//!     .with("CreatedAfter", Utc::now() - Duration::days(1))
//!     .with("Limit", 100u32);
//!
//! match seller_center.order().get_orders(params).await {
//!     Ok(Some(orders)) => println!("{orders}"),
//!     Ok(None) => println!("No orders"),
//!     Err(RequestError::ApiError { message, .. }) => eprintln!("Rejected: {message}"),
//!     Err(e) => eprintln!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Product Commands
//!
//! Mutations take an XML request document, which is pretty-printed before
//! being sent:
//!
//! ```rust,ignore
//! let head = seller_center
//!     .product()
//!     .remove_product("<Request><Product><Skus><Sku><SellerSku>sku-1</SellerSku></Sku></Skus></Product></Request>")
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits `tracing` events and installs no subscriber. Outgoing
//! requests are logged at `debug` level by action name; API errors and
//! undelivered commands at `warn` level. The API key and signatures are
//! never logged.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Snapshot credentials**: Façades keep the credential they were created with

mod client;
pub mod clients;
pub mod codec;
pub mod config;
pub mod error;
pub mod resources;
pub mod signing;

// Re-export public types at crate root for convenience
pub use client::SellerCenter;
pub use config::{
    ApiKey, ApiVersion, BaseUrl, Credential, CredentialBuilder, OutputFormat, UserId,
    DEFAULT_BASE_URL,
};
pub use error::ConfigError;

// Re-export request and response types
pub use clients::{extract, HttpError, RawResponse, RequestError};
pub use resources::{Order, Product, QualityControl, ShipmentProvider};
pub use signing::{ParamValue, ParameterSet};
