use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde_json::{json, Value};

use crate::builders::{AnyBuilder, Builder};
use crate::clients::{Client, HttpError};
use crate::entities::{Entity, HasBuilder};
use crate::query::Query;
use crate::services::errors::is_stale_object;
use crate::services::{ResourceDescriptor, ServiceError};

/// Generic CRUD and query façade for one entity type.
///
/// A service holds nothing but a borrowed [`Client`]; everything it knows
/// about the entity comes from `E`'s [`Entity`] facts. Each method awaits
/// exactly one request, except [`all`](Self::all) which may page.
///
/// # Envelopes
///
/// QuickBooks wraps single-entity responses under the entity name
/// (`{"Invoice": {...}, "time": "..."}`). [`load`](Self::load) and
/// [`delete`](Self::delete) always unwrap that envelope;
/// [`create`](Self::create) and [`update`](Self::update) unwrap it only when
/// `E::RESPONSE_HAS_ROOT` is `true` and otherwise return the body as is.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::entities::Invoice;
///
/// let invoices = client.service::<Invoice>();
///
/// let invoice = invoices.load("130").await?;
/// let sync_token: u64 = invoice["SyncToken"].as_str().unwrap().parse()?;
/// invoices.delete("130", sync_token).await?;
/// ```
pub struct Service<'c, E> {
    client: &'c Client,
    entity: PhantomData<E>,
}

impl<'c, E: Entity> Service<'c, E> {
    /// Creates a service bound to `client`.
    ///
    /// Usually obtained through [`Client::service`].
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self {
            client,
            entity: PhantomData,
        }
    }

    /// Returns the client this service sends requests through.
    #[must_use]
    pub const fn client(&self) -> &'c Client {
        self.client
    }

    /// Returns the type name of the entity.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        E::CLASS_NAME
    }

    /// Returns the entity name (the envelope key).
    #[must_use]
    pub fn entity_name(&self) -> &'static str {
        E::entity_name()
    }

    /// Returns the resource name (the URL path segment).
    #[must_use]
    pub fn resource_name(&self) -> Cow<'static, str> {
        E::resource_name()
    }

    /// Returns the entity's static facts.
    #[must_use]
    pub fn descriptor(&self) -> ResourceDescriptor {
        E::descriptor()
    }

    /// Loads one entity with `GET {resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] on a 404,
    /// [`ServiceError::Decode`] if the envelope key is absent, and
    /// [`ServiceError::Transport`] for any other failure.
    pub async fn load(&self, id: &str) -> Result<Value, ServiceError> {
        let descriptor = self.descriptor();
        tracing::debug!("Loading {} {} from {}", descriptor.entity(), id, descriptor.resource());

        let response = self
            .client
            .get(&descriptor.entity_path(id))
            .await
            .map_err(|error| match error.status() {
                Some(404) => ServiceError::NotFound {
                    entity: descriptor.entity(),
                    id: id.to_string(),
                },
                _ => ServiceError::Transport(error),
            })?;

        unwrap_envelope(response.body, descriptor.entity())
    }

    /// Creates an entity with `POST {resource}`.
    ///
    /// `data` is sent as is, typically the output of a builder's
    /// [`build`](Builder::build).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if an expected envelope key is absent
    /// and [`ServiceError::Transport`] for any transport failure, including
    /// validation faults raised by QuickBooks.
    pub async fn create(&self, data: impl Into<Value>) -> Result<Value, ServiceError> {
        let descriptor = self.descriptor();
        tracing::debug!("Creating {} at {}", descriptor.entity(), descriptor.resource());

        let response = self.client.post(descriptor.resource(), data.into()).await?;

        read_body(response.body, &descriptor)
    }

    /// Updates an entity with `POST {resource}?operation=update`.
    ///
    /// `data` must carry the entity's `Id` and current `SyncToken`; QuickBooks
    /// rejects updates against a stale token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Conflict`] for a stale `SyncToken`,
    /// [`ServiceError::Decode`] if an expected envelope key is absent and
    /// [`ServiceError::Transport`] for any other failure.
    pub async fn update(&self, data: impl Into<Value>) -> Result<Value, ServiceError> {
        let descriptor = self.descriptor();
        tracing::debug!("Updating {} at {}", descriptor.entity(), descriptor.resource());

        let response = self
            .client
            .post(&descriptor.operation_path("update"), data.into())
            .await
            .map_err(|error| write_error(error, descriptor.entity()))?;

        read_body(response.body, &descriptor)
    }

    /// Deletes an entity with `POST {resource}?operation=delete`.
    ///
    /// The body is `{"Id": id, "SyncToken": sync_token}`. Pass `0` for
    /// `sync_token` when the entity has never been modified.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Conflict`] for a stale `SyncToken`,
    /// [`ServiceError::Decode`] if the envelope key is absent and
    /// [`ServiceError::Transport`] for any other failure.
    pub async fn delete(&self, id: &str, sync_token: u64) -> Result<Value, ServiceError> {
        let descriptor = self.descriptor();
        tracing::debug!(
            "Deleting {} {} (SyncToken {}) at {}",
            descriptor.entity(),
            id,
            sync_token,
            descriptor.resource()
        );

        let body = json!({ "Id": id, "SyncToken": sync_token });
        let response = self
            .client
            .post(&descriptor.operation_path("delete"), body)
            .await
            .map_err(|error| write_error(error, descriptor.entity()))?;

        unwrap_envelope(response.body, descriptor.entity())
    }

    /// Returns a query scoped to this entity.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let overdue = client
    ///     .service::<Invoice>()
    ///     .query()
    ///     .where_op("DueDate", "<", "2024-01-01")
    ///     .where_op("Balance", ">", 0)
    ///     .get()
    ///     .await?;
    /// ```
    #[must_use]
    pub fn query(&self) -> Query<'c> {
        Query::new(self.client).entity(E::entity_name())
    }

    /// Returns every record of this entity.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if any page of the query fails.
    pub async fn all(&self) -> Result<Vec<Value>, ServiceError> {
        self.query().get().await
    }

    /// Resolves this entity's builder by its class name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BuilderNotFound`] if the client's registry has
    /// no builder registered under `E::CLASS_NAME`.
    pub fn get_builder(&self) -> Result<AnyBuilder<'c>, ServiceError> {
        self.client.resolve_builder(E::CLASS_NAME)
    }

    /// Returns this entity's typed builder.
    #[must_use]
    pub fn builder(&self) -> E::Builder
    where
        E: HasBuilder<'c>,
    {
        E::Builder::new(self.client)
    }
}

impl<E> Clone for Service<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Service<'_, E> {}

impl<E: Entity> fmt::Debug for Service<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("entity", &E::entity_name())
            .field("resource", &E::resource_name())
            .finish_non_exhaustive()
    }
}

/// Extracts the value stored under `key` from a response body.
fn unwrap_envelope(body: Value, key: &'static str) -> Result<Value, ServiceError> {
    match body {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
    .ok_or_else(|| ServiceError::Decode {
        key: key.to_string(),
    })
}

fn read_body(body: Value, descriptor: &ResourceDescriptor) -> Result<Value, ServiceError> {
    if descriptor.response_has_root() {
        unwrap_envelope(body, descriptor.entity())
    } else {
        Ok(body)
    }
}

/// Maps a failed write to [`ServiceError::Conflict`] when QuickBooks reports
/// a stale `SyncToken`.
fn write_error(error: HttpError, entity: &'static str) -> ServiceError {
    match error {
        HttpError::Response(response) if is_stale_object(&response) => {
            tracing::warn!(
                "{} write rejected with stale SyncToken (status {}, fault {:?})",
                entity,
                response.code,
                response.fault_code
            );
            ServiceError::Conflict {
                entity,
                source: response,
            }
        }
        other => ServiceError::Transport(other),
    }
}
