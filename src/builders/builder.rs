use chrono::NaiveDate;
use serde_json::Value;

use crate::builders::Payload;
use crate::clients::Client;

/// The state every builder wraps: a borrowed client and the payload.
///
/// Concrete builders hold one `BuilderCore` and expose it through
/// [`Builder::core`] / [`Builder::core_mut`]; all shared behavior is written
/// against it.
#[derive(Clone, Debug)]
pub struct BuilderCore<'c> {
    client: &'c Client,
    payload: Payload,
}

impl<'c> BuilderCore<'c> {
    /// Creates a core with an empty payload.
    #[must_use]
    pub fn new(client: &'c Client) -> Self {
        Self::with_payload(client, Payload::new())
    }

    /// Creates a core seeded with `payload`.
    #[must_use]
    pub const fn with_payload(client: &'c Client, payload: Payload) -> Self {
        Self { client, payload }
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &'c Client {
        self.client
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the payload mutably.
    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    /// Consumes the core, returning its payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// A fluent builder for one entity's request body.
///
/// Builders are single-use values: create one, chain setters, then call
/// [`build`](Self::build) and hand the result to a
/// [`Service`](crate::services::Service). Setters never fail and may be
/// called in any order; setting the same path twice keeps the last value.
/// Builders perform no validation; QuickBooks reports invalid payloads when
/// they are submitted.
///
/// The builder borrows the [`Client`] it was created from so that it can
/// create sibling builders for nested objects (see
/// [`Itemizable`](super::Itemizable)).
///
/// # Implementing a Builder
///
/// ```rust,ignore
/// use quickbooks_api::builders::{Builder, BuilderCore};
///
/// #[derive(Debug)]
/// pub struct TimeActivity<'c> {
///     core: BuilderCore<'c>,
/// }
///
/// impl<'c> Builder<'c> for TimeActivity<'c> {
///     const NAME: &'static str = "TimeActivity";
///
///     fn from_core(core: BuilderCore<'c>) -> Self {
///         Self { core }
///     }
///     fn core(&self) -> &BuilderCore<'c> {
///         &self.core
///     }
///     fn core_mut(&mut self) -> &mut BuilderCore<'c> {
///         &mut self.core
///     }
///     fn into_core(self) -> BuilderCore<'c> {
///         self.core
///     }
/// }
/// ```
pub trait Builder<'c>: Sized {
    /// The class name of the entity this builder assembles.
    const NAME: &'static str;

    /// Wraps a core.
    fn from_core(core: BuilderCore<'c>) -> Self;

    /// Returns the core.
    fn core(&self) -> &BuilderCore<'c>;

    /// Returns the core mutably.
    fn core_mut(&mut self) -> &mut BuilderCore<'c>;

    /// Unwraps the core.
    fn into_core(self) -> BuilderCore<'c>;

    /// Creates a builder with an empty payload.
    #[must_use]
    fn new(client: &'c Client) -> Self {
        Self::from_core(BuilderCore::new(client))
    }

    /// Creates a builder seeded with an existing payload, such as a loaded
    /// entity about to be updated.
    #[must_use]
    fn from_payload(client: &'c Client, payload: Payload) -> Self {
        Self::from_core(BuilderCore::with_payload(client, payload))
    }

    /// Returns the client this builder was created from.
    #[must_use]
    fn client(&self) -> &'c Client {
        self.core().client()
    }

    /// Returns the payload accumulated so far.
    #[must_use]
    fn payload<'s>(&'s self) -> &'s Payload
    where
        'c: 's,
    {
        self.core().payload()
    }

    /// Returns the payload mutably.
    fn payload_mut<'s>(&'s mut self) -> &'s mut Payload
    where
        'c: 's,
    {
        self.core_mut().payload_mut()
    }

    /// Writes `value` at `path`.
    ///
    /// Covers fields without a dedicated setter.
    #[must_use]
    fn set(mut self, path: &[&str], value: impl Into<Value>) -> Self {
        self.payload_mut().set(path, value);
        self
    }

    /// Consumes the builder, returning the request body.
    #[must_use]
    fn build(self) -> Value {
        self.into_core().into_payload().into_value()
    }
}

/// Formats a date the way QuickBooks expects (`YYYY-MM-DD`).
pub(crate) fn date_value(date: NaiveDate) -> Value {
    Value::String(date.format("%Y-%m-%d").to_string())
}

/// Implements [`Builder`] for a struct with a `core` field.
macro_rules! impl_builder {
    ($builder:ident, $name:literal) => {
        impl<'c> $crate::builders::Builder<'c> for $builder<'c> {
            const NAME: &'static str = $name;

            fn from_core(core: $crate::builders::BuilderCore<'c>) -> Self {
                Self { core }
            }

            fn core(&self) -> &$crate::builders::BuilderCore<'c> {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::builders::BuilderCore<'c> {
                &mut self.core
            }

            fn into_core(self) -> $crate::builders::BuilderCore<'c> {
                self.core
            }
        }
    };
}

pub(crate) use impl_builder;
