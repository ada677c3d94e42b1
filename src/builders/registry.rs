//! Name-keyed builder lookup.
//!
//! A service finds its builder by the entity's class name: the `Invoice`
//! service resolves the builder registered as `"Invoice"`. Resolution goes
//! through a [`BuilderRegistry`] of plain constructor functions returning an
//! [`AnyBuilder`], so no runtime reflection is involved and every built-in
//! pairing is checked at compile time.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::builders::{
    Builder, BuilderCore, Customer, Estimate, Invoice, Item, Payload, SalesReceipt,
};
use crate::clients::Client;
use crate::entities::{self, HasBuilder};

/// Constructs a builder bound to the given client.
pub type BuilderConstructor = for<'c> fn(&'c Client) -> AnyBuilder<'c>;

/// Declares the built-in builders.
///
/// For each builder type this generates an [`AnyBuilder`] variant, the
/// conversions to and from it, the [`HasBuilder`] pairing with the entity of
/// the same name, and its default registry entry.
macro_rules! builders {
    ($($builder:ident),+ $(,)?) => {
        /// A builder resolved by name.
        ///
        /// Built-in builders resolve to their own variant; builders
        /// registered at runtime for other entities use
        /// [`AnyBuilder::Custom`], which only supports generic path setting.
        ///
        /// Convert back to the concrete type with `TryFrom`:
        ///
        /// ```rust,ignore
        /// let invoice: quickbooks_api::builders::Invoice = service.get_builder()?.try_into()?;
        /// ```
        #[derive(Clone, Debug)]
        pub enum AnyBuilder<'c> {
            $(
                #[doc = concat!("The [`", stringify!($builder), "`] builder.")]
                $builder($builder<'c>),
            )+
            /// A payload-only builder for an entity without a dedicated type.
            Custom {
                /// The class name the builder was registered under.
                name: &'static str,
                /// The builder state.
                core: BuilderCore<'c>,
            },
        }

        impl<'c> AnyBuilder<'c> {
            /// Returns the name the builder is registered under.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$builder(_) => <$builder<'c> as Builder<'c>>::NAME,)+
                    Self::Custom { name, .. } => *name,
                }
            }

            /// Returns the client the builder is bound to.
            #[must_use]
            pub fn client(&self) -> &'c Client {
                match self {
                    $(Self::$builder(builder) => builder.client(),)+
                    Self::Custom { core, .. } => core.client(),
                }
            }

            /// Returns the payload accumulated so far.
            #[must_use]
            pub fn payload(&self) -> &Payload {
                match self {
                    $(Self::$builder(builder) => builder.payload(),)+
                    Self::Custom { core, .. } => core.payload(),
                }
            }

            /// Returns the payload mutably.
            pub fn payload_mut(&mut self) -> &mut Payload {
                match self {
                    $(Self::$builder(builder) => builder.payload_mut(),)+
                    Self::Custom { core, .. } => core.payload_mut(),
                }
            }

            /// Consumes the builder, returning the request body.
            #[must_use]
            pub fn build(self) -> Value {
                match self {
                    $(Self::$builder(builder) => builder.build(),)+
                    Self::Custom { core, .. } => core.into_payload().into_value(),
                }
            }
        }

        $(
            impl<'c> From<$builder<'c>> for AnyBuilder<'c> {
                fn from(builder: $builder<'c>) -> Self {
                    Self::$builder(builder)
                }
            }

            impl<'c> TryFrom<AnyBuilder<'c>> for $builder<'c> {
                type Error = AnyBuilder<'c>;

                fn try_from(builder: AnyBuilder<'c>) -> Result<Self, Self::Error> {
                    match builder {
                        AnyBuilder::$builder(builder) => Ok(builder),
                        other => Err(other),
                    }
                }
            }

            impl<'c> HasBuilder<'c> for entities::$builder {
                type Builder = $builder<'c>;
            }
        )+

        impl Default for BuilderRegistry {
            /// Creates a registry holding every built-in builder.
            fn default() -> Self {
                let mut registry = Self::new();
                $(
                    registry.register(<$builder<'_> as Builder<'_>>::NAME, {
                        fn construct(client: &Client) -> AnyBuilder<'_> {
                            AnyBuilder::$builder($builder::new(client))
                        }
                        construct
                    });
                )+
                registry
            }
        }
    };
}

builders!(Invoice, Estimate, SalesReceipt, Item, Customer);

impl<'c> AnyBuilder<'c> {
    /// Creates a payload-only builder registered as `name`.
    #[must_use]
    pub fn custom(name: &'static str, client: &'c Client) -> Self {
        Self::Custom {
            name,
            core: BuilderCore::new(client),
        }
    }

    /// Writes `value` at `path`.
    #[must_use]
    pub fn set(mut self, path: &[&str], value: impl Into<Value>) -> Self {
        self.payload_mut().set(path, value);
        self
    }
}

/// Maps entity class names to builder constructors.
///
/// [`BuilderRegistry::default`] holds the built-in builders (`Invoice`,
/// `Estimate`, `SalesReceipt`, `Item`, `Customer`). Names are matched
/// exactly and case-sensitively.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::builders::{AnyBuilder, BuilderRegistry};
///
/// let mut registry = BuilderRegistry::default();
/// registry.register("TimeActivity", |client| AnyBuilder::custom("TimeActivity", client));
///
/// assert!(registry.contains("Invoice"));
/// assert!(registry.contains("TimeActivity"));
/// assert!(!registry.contains("invoice"));
/// ```
#[derive(Clone)]
pub struct BuilderRegistry {
    constructors: HashMap<&'static str, BuilderConstructor>,
}

impl BuilderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers `constructor` under `name`, returning the constructor it
    /// replaced, if any.
    pub fn register(
        &mut self,
        name: &'static str,
        constructor: BuilderConstructor,
    ) -> Option<BuilderConstructor> {
        self.constructors.insert(name, constructor)
    }

    /// Returns the constructor registered under `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BuilderConstructor> {
        self.constructors.get(name).copied()
    }

    /// Returns `true` if a builder is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Returns `true` if no builder is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::test_client;
    use serde_json::json;

    #[test]
    fn test_default_registry_holds_built_in_builders() {
        let registry = BuilderRegistry::default();

        assert_eq!(
            registry.names(),
            vec!["Customer", "Estimate", "Invoice", "Item", "SalesReceipt"]
        );
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = BuilderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("Invoice").is_none());
    }

    #[test]
    fn test_resolved_constructor_builds_matching_variant() {
        let client = test_client();
        let registry = BuilderRegistry::default();

        for name in registry.names() {
            let constructor = registry.resolve(name).unwrap();
            let builder = constructor(&client);
            assert_eq!(builder.name(), name);
            assert!(builder.payload().is_empty());
        }
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = BuilderRegistry::default();
        let previous = registry.register("Invoice", |client| {
            AnyBuilder::custom("Invoice", client)
        });
        assert!(previous.is_some());

        let client = test_client();
        let builder = registry.resolve("Invoice").unwrap()(&client);
        assert!(matches!(builder, AnyBuilder::Custom { name: "Invoice", .. }));
    }

    #[test]
    fn test_any_builder_round_trips_to_concrete_type() {
        let client = test_client();
        let any = client.resolve_builder("Invoice").unwrap();

        let invoice = Invoice::try_from(any).unwrap();
        let back: AnyBuilder<'_> = invoice.into();
        assert!(Estimate::try_from(back).is_err());
    }

    #[test]
    fn test_custom_builder_sets_paths() {
        let client = test_client();
        let payload = AnyBuilder::custom("TimeActivity", &client)
            .set(&["NameOf"], "Employee")
            .set(&["EmployeeRef", "value"], "55")
            .build();

        assert_eq!(
            payload,
            json!({"NameOf": "Employee", "EmployeeRef": {"value": "55"}})
        );
    }

    #[test]
    fn test_registry_debug_lists_names() {
        let debug = format!("{:?}", BuilderRegistry::default());
        assert!(debug.contains("Invoice"));
        assert!(debug.contains("SalesReceipt"));
    }
}
