//! # QuickBooks Online API Rust SDK
//!
//! A Rust SDK for the QuickBooks Online accounting API, providing type-safe
//! configuration, a generic entity service layer, and fluent payload builders.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`QuickbooksConfig`] and [`QuickbooksConfigBuilder`]
//! - Validated newtypes for the company ID, access token and API host
//! - One generic [`Service`] for every entity: `load`, `create`, `update`,
//!   `delete`, `query`, `all`
//! - Entity types declared with the [`entity!`] macro, from three static facts
//! - Fluent [`builders`] with shared capabilities ([`HasCustomer`], [`Itemizable`])
//! - Builder lookup by entity name through a [`BuilderRegistry`]
//! - A query adapter with automatic paging ([`Query`])
//! - An async HTTP client speaking the QuickBooks `Fault` error format
//!
//! ## Quick Start
//!
//! ```rust
//! use quickbooks_api::{AccessToken, Client, Environment, QuickbooksConfig, RealmId};
//!
//! let config = QuickbooksConfig::builder()
//!     .realm_id(RealmId::new("4620816365037572").unwrap())
//!     .access_token(AccessToken::new("your-oauth2-access-token").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//! ```
//!
//! ## Services
//!
//! Every entity is reached through the same generic service. The entity type
//! decides the resource path and the response envelope:
//!
//! ```rust,ignore
//! use quickbooks_api::entities::{Customer, Invoice};
//!
//! let customer = client.service::<Customer>().load("58").await?;
//!
//! let invoices = client.service::<Invoice>();
//! let open = invoices.query().where_op("Balance", ">", 0).get().await?;
//! let every_invoice = invoices.all().await?;
//! ```
//!
//! ## Builders
//!
//! Builders assemble nested request bodies. Transaction builders can create
//! line builders from their own client to compose lines:
//!
//! ```rust,ignore
//! use quickbooks_api::builders::{Builder, HasCustomer, Itemizable};
//! use quickbooks_api::entities::Invoice;
//!
//! let invoices = client.service::<Invoice>();
//! let invoice = invoices.builder();
//! let line = invoice.sales_line().set_item_ref("1").set_amount(100.0);
//!
//! let payload = invoice
//!     .set_customer("58")
//!     .add_item(line)
//!     .set_discount_percent(10.0)
//!     .build();
//!
//! let created = invoices.create(payload).await?;
//! ```
//!
//! ## Custom Entities
//!
//! ```rust,ignore
//! quickbooks_api::entity!(pub TimeActivity);
//!
//! let activities = client.service::<TimeActivity>().all().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client and configuration are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Each service call sends one request per page

pub mod builders;
pub mod clients;
pub mod config;
pub mod entities;
pub mod error;
pub mod query;
pub mod services;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, BaseUrl, Environment, QuickbooksConfig, QuickbooksConfigBuilder, RealmId,
};
pub use error::ConfigError;

pub use builders::{AnyBuilder, Builder, BuilderRegistry, HasCustomer, Itemizable, Payload};
pub use entities::{Entity, HasBuilder};
pub use query::{Direction, Query};
pub use services::{ResourceDescriptor, Service, ServiceError};

// Re-export HTTP client types
pub use clients::{
    Client, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError,
};
