//! HTTP client types for QuickBooks API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the QuickBooks Online API and the [`Client`] every service
//! and builder is bound to.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The shared client exposing `get`/`post` and sibling lookup
//! - [`HttpClient`]: The async HTTP client underneath it
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Every transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::{AccessToken, Client, QuickbooksConfig, RealmId};
//!
//! let config = QuickbooksConfig::builder()
//!     .realm_id(RealmId::new("4620816365037572").unwrap())
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(&config);
//! let response = client.get("companyinfo/4620816365037572").await?;
//! println!("{}", response.body["CompanyInfo"]["CompanyName"]);
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call sends exactly one request and reports the outcome;
//! throttling (HTTP 429) surfaces as [`HttpError::Response`].

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::Client;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
