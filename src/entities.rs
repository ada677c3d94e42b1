//! QuickBooks entity types.
//!
//! Every QuickBooks business object (invoices, customers, items, ...) is
//! represented by a zero-sized marker type implementing [`Entity`]. The trait
//! carries three static facts from which a [`Service`](crate::services::Service)
//! derives all of its REST semantics:
//!
//! - the **entity name**, used as the response envelope key and as the
//!   `FROM` target of queries (defaults to the type name),
//! - the **resource name**, used as the URL path segment (defaults to the
//!   lowercased entity name),
//! - whether responses are wrapped under the entity name at all.
//!
//! # Declaring Entities
//!
//! The [`entity!`](crate::entity) macro declares a marker type and its
//! [`Entity`] implementation in one line:
//!
//! ```rust
//! use quickbooks_api::entities::Entity;
//!
//! quickbooks_api::entity!(pub TimeActivity);
//! quickbooks_api::entity!(pub TaxAgency { resource: "taxagency", response_has_root: true });
//!
//! assert_eq!(TimeActivity::entity_name(), "TimeActivity");
//! assert_eq!(TimeActivity::resource_name(), "timeactivity");
//! ```

use std::borrow::Cow;

use crate::builders::Builder;
use crate::services::ResourceDescriptor;

/// A QuickBooks entity type.
///
/// Implementors only provide [`CLASS_NAME`](Self::CLASS_NAME); the other
/// constants are opt-in overrides. Prefer the [`entity!`](crate::entity)
/// macro over implementing this trait by hand.
///
/// # Associated Constants
///
/// - `CLASS_NAME`: The type name, used to resolve the entity's builder
/// - `ENTITY`: Optional override of the envelope key
/// - `RESOURCE`: Optional override of the URL path segment
/// - `RESPONSE_HAS_ROOT`: Whether create/update responses are enveloped
pub trait Entity: Send + Sync + 'static {
    /// The type name (e.g., "Invoice").
    const CLASS_NAME: &'static str;

    /// Envelope key override. Defaults to [`CLASS_NAME`](Self::CLASS_NAME).
    const ENTITY: Option<&'static str> = None;

    /// URL path segment override. Defaults to the lowercased entity name.
    const RESOURCE: Option<&'static str> = None;

    /// Whether create and update responses are wrapped under the entity name.
    const RESPONSE_HAS_ROOT: bool = true;

    /// Returns the entity name: the `ENTITY` override if set, else the type name.
    #[must_use]
    fn entity_name() -> &'static str {
        Self::ENTITY.unwrap_or(Self::CLASS_NAME)
    }

    /// Returns the resource name: the `RESOURCE` override verbatim if set,
    /// else the lowercased entity name.
    #[must_use]
    fn resource_name() -> Cow<'static, str> {
        Self::RESOURCE.map_or_else(
            || Cow::Owned(Self::entity_name().to_lowercase()),
            Cow::Borrowed,
        )
    }

    /// Returns the three static facts as a value.
    #[must_use]
    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor::new(
            Self::resource_name(),
            Self::entity_name(),
            Self::RESPONSE_HAS_ROOT,
        )
    }
}

/// An entity with a typed payload builder.
///
/// Implemented for the built-in entities whose builder shares their name,
/// which lets [`Service::builder`](crate::services::Service::builder) return
/// the concrete builder type.
pub trait HasBuilder<'c>: Entity {
    /// The builder for this entity.
    type Builder: Builder<'c>;
}

/// Declares an entity marker type implementing [`Entity`].
///
/// The optional block accepts `entity`, `resource` and `response_has_root`
/// overrides in any order.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::entities::Entity;
///
/// quickbooks_api::entity!(
///     /// Company-level preferences.
///     pub Preferences
/// );
/// quickbooks_api::entity!(pub(crate) ExchangeRate { resource: "exchangerate", response_has_root: false });
///
/// assert_eq!(Preferences::resource_name(), "preferences");
/// assert!(!ExchangeRate::RESPONSE_HAS_ROOT);
/// ```
#[macro_export]
macro_rules! entity {
    (@const entity $value:expr) => {
        const ENTITY: ::core::option::Option<&'static str> = ::core::option::Option::Some($value);
    };
    (@const resource $value:expr) => {
        const RESOURCE: ::core::option::Option<&'static str> = ::core::option::Option::Some($value);
    };
    (@const response_has_root $value:expr) => {
        const RESPONSE_HAS_ROOT: bool = $value;
    };
    ($(#[$meta:meta])* $vis:vis $name:ident { $($key:ident : $value:expr),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::entities::Entity for $name {
            const CLASS_NAME: &'static str = stringify!($name);
            $( $crate::entity!(@const $key $value); )*
        }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $crate::entity!($(#[$meta])* $vis $name {});
    };
}

entity!(
    /// A ledger account.
    pub Account
);
entity!(
    /// A vendor bill.
    pub Bill
);
entity!(
    /// The company record itself.
    pub CompanyInfo
);
entity!(
    /// A customer or sub-customer (job).
    pub Customer
);
entity!(pub Employee);
entity!(
    /// A quote sent to a customer before invoicing.
    pub Estimate
);
entity!(
    /// A sales invoice.
    pub Invoice
);
entity!(
    /// A product or service that appears on sales lines.
    pub Item
);
entity!(
    /// A customer payment applied to invoices.
    pub Payment
);
entity!(
    /// A sale paid in full at the time of the transaction.
    pub SalesReceipt
);
entity!(pub TaxCode);
entity!(pub TaxRate);
entity!(pub Vendor);
entity!(
    /// The tax service endpoint that creates tax codes with their rates.
    ///
    /// It lives under `taxservice/taxcode` and answers without an envelope.
    pub TaxService { resource: "taxservice/taxcode", response_has_root: false }
);
