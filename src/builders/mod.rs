//! Fluent payload builders.
//!
//! A builder accumulates the nested JSON body of one request through chained
//! setters, then hands it to a [`Service`](crate::services::Service):
//!
//! ```rust,ignore
//! use quickbooks_api::builders::{Builder, HasCustomer, Itemizable};
//! use quickbooks_api::entities::Invoice;
//!
//! let invoices = client.service::<Invoice>();
//! let invoice = invoices.builder();
//! let line = invoice.sales_line().set_item_ref("1").set_amount(100.0);
//!
//! let created = invoices
//!     .create(invoice.set_customer("58").add_item(line).build())
//!     .await?;
//! ```
//!
//! # Overview
//!
//! - [`Builder`]: The shared builder contract, implemented over a [`BuilderCore`]
//! - [`Payload`]: The insertion-ordered JSON object being built
//! - [`HasCustomer`] / [`Itemizable`]: Capability traits transaction builders opt into
//! - [`Invoice`], [`Estimate`], [`SalesReceipt`], [`Customer`]: Entity builders
//! - [`Item`]: Transaction line builder
//! - [`BuilderRegistry`] / [`AnyBuilder`]: Lookup of builders by entity name

mod builder;
mod customer;
mod estimate;
mod invoice;
mod item;
mod payload;
mod registry;
mod sales_receipt;
mod traits;

pub use builder::{Builder, BuilderCore};
pub use customer::Customer;
pub use estimate::Estimate;
pub use invoice::Invoice;
pub use item::Item;
pub use payload::Payload;
pub use registry::{AnyBuilder, BuilderConstructor, BuilderRegistry};
pub use sales_receipt::SalesReceipt;
pub use traits::{HasCustomer, Itemizable, LINE};
