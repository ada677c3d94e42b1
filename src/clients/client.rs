//! The shared QuickBooks client.
//!
//! This module provides [`Client`], the object every service and builder
//! reaches the API through. It sends `GET`/`POST` requests relative to the
//! company path and hands out sibling services, builders and queries.

use serde_json::Value;

use crate::builders::{self, AnyBuilder, Builder, BuilderRegistry};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{QuickbooksConfig, RealmId};
use crate::entities::Entity;
use crate::query::Query;
use crate::services::{Service, ServiceError};

/// Client for the QuickBooks Online accounting API.
///
/// Services and builders borrow the client (`&Client`) to reach the
/// transport and to look up their siblings; they never own it.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::{AccessToken, Client, QuickbooksConfig, RealmId};
/// use quickbooks_api::builders::{Builder, HasCustomer, Itemizable};
/// use quickbooks_api::entities::Invoice;
///
/// let config = QuickbooksConfig::builder()
///     .realm_id(RealmId::new("4620816365037572")?)
///     .access_token(AccessToken::new("access-token")?)
///     .build()?;
/// let client = Client::new(&config);
///
/// let invoices = client.service::<Invoice>();
/// let payload = invoices
///     .builder()
///     .set_customer("58")
///     .set_discount_percent(10.0)
///     .build();
///
/// let created = invoices.create(payload).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The company this client is scoped to.
    realm_id: RealmId,
    /// Builder constructors, keyed by entity class name.
    builders: BuilderRegistry,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client with the default builder registry.
    #[must_use]
    pub fn new(config: &QuickbooksConfig) -> Self {
        Self::with_registry(config, BuilderRegistry::default())
    }

    /// Creates a new client with a custom builder registry.
    #[must_use]
    pub fn with_registry(config: &QuickbooksConfig, builders: BuilderRegistry) -> Self {
        tracing::debug!(
            "Creating QuickBooks client for company {} ({}) with {} builders",
            config.realm_id(),
            config.environment(),
            builders.len()
        );

        Self {
            http_client: HttpClient::new(config),
            realm_id: config.realm_id().clone(),
            builders,
        }
    }

    /// Returns the company ID this client is scoped to.
    #[must_use]
    pub const fn realm_id(&self) -> &RealmId {
        &self.realm_id
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the builder registry.
    #[must_use]
    pub const fn registry(&self) -> &BuilderRegistry {
        &self.builders
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path and
    /// [`HttpError::Response`] for non-2xx responses.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body to the given path.
    ///
    /// The path may carry a query suffix such as `?operation=update`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path and
    /// [`HttpError::Response`] for non-2xx responses.
    pub async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body)).await
    }

    /// Returns the service for entity `E`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customers = client.service::<quickbooks_api::entities::Customer>();
    /// let customer = customers.load("58").await?;
    /// ```
    #[must_use]
    pub const fn service<E: Entity>(&self) -> Service<'_, E> {
        Service::new(self)
    }

    /// Instantiates a builder of type `B` bound to this client.
    #[must_use]
    pub fn builder<'c, B: Builder<'c>>(&'c self) -> B {
        B::new(self)
    }

    /// Resolves a builder by entity class name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BuilderNotFound`] if no builder is registered
    /// under `name`. Matching is exact and case-sensitive.
    pub fn resolve_builder(&self, name: &str) -> Result<AnyBuilder<'_>, ServiceError> {
        let constructor =
            self.builders
                .resolve(name)
                .ok_or_else(|| ServiceError::BuilderNotFound {
                    name: name.to_string(),
                })?;
        Ok(constructor(self))
    }

    /// Returns a new line item builder.
    ///
    /// Host builders use this to compose lines (discounts, sales items) into
    /// their own payload.
    #[must_use]
    pub fn item_builder(&self) -> builders::Item<'_> {
        self.builder()
    }

    /// Returns an unscoped query. Call [`Query::entity`] before executing it.
    #[must_use]
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        let normalized_path = normalize_path(path);

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

/// Strips leading `/` characters so paths join cleanly with the company path.
fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;
    use crate::entities::{Invoice, TaxService};

    fn create_test_client() -> Client {
        let config = QuickbooksConfig::builder()
            .realm_id(RealmId::new("123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        Client::new(&config)
    }

    #[test]
    fn test_normalize_path_strips_leading_slashes() {
        assert_eq!(normalize_path("/invoice"), "invoice");
        assert_eq!(normalize_path("//invoice/12"), "invoice/12");
        assert_eq!(
            normalize_path("invoice?operation=update"),
            "invoice?operation=update"
        );
        assert_eq!(normalize_path("/"), "");
    }

    #[tokio::test]
    async fn test_empty_path_is_rejected_before_sending() {
        let client = create_test_client();
        let result = client.get("/").await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(
                crate::clients::InvalidHttpRequestError::EmptyPath
            ))
        ));
    }

    #[test]
    fn test_client_scopes_http_client_to_realm() {
        let client = create_test_client();
        assert_eq!(client.realm_id().as_ref(), "123");
        assert_eq!(client.http_client().base_path(), "/v3/company/123");
    }

    #[test]
    fn test_resolve_builder_by_exact_name() {
        let client = create_test_client();

        let builder = client.resolve_builder("Invoice").unwrap();
        assert_eq!(builder.name(), "Invoice");

        assert!(matches!(
            client.resolve_builder("invoice"),
            Err(ServiceError::BuilderNotFound { name }) if name == "invoice"
        ));
    }

    #[test]
    fn test_service_lookup_carries_entity_facts() {
        let client = create_test_client();

        assert_eq!(client.service::<Invoice>().resource_name(), "invoice");
        assert_eq!(
            client.service::<TaxService>().resource_name(),
            "taxservice/taxcode"
        );
    }

    #[test]
    fn test_item_builder_starts_empty() {
        let client = create_test_client();
        let item = client.item_builder();
        assert!(item.payload().is_empty());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
