use std::borrow::Cow;

/// The static REST facts of one entity type.
///
/// Obtained from [`Entity::descriptor`](crate::entities::Entity::descriptor)
/// or [`Service::descriptor`](super::Service::descriptor).
///
/// # Example
///
/// ```rust
/// use quickbooks_api::entities::{Entity, Invoice};
///
/// let descriptor = Invoice::descriptor();
/// assert_eq!(descriptor.resource(), "invoice");
/// assert_eq!(descriptor.entity(), "Invoice");
/// assert!(descriptor.response_has_root());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    resource: Cow<'static, str>,
    entity: &'static str,
    response_has_root: bool,
}

impl ResourceDescriptor {
    /// Creates a descriptor from its three facts.
    #[must_use]
    pub fn new(
        resource: impl Into<Cow<'static, str>>,
        entity: &'static str,
        response_has_root: bool,
    ) -> Self {
        Self {
            resource: resource.into(),
            entity,
            response_has_root,
        }
    }

    /// Returns the URL path segment (e.g., "invoice").
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the response envelope key (e.g., "Invoice").
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns whether create and update responses are enveloped.
    #[must_use]
    pub const fn response_has_root(&self) -> bool {
        self.response_has_root
    }

    /// Returns the path of the entity with the given ID.
    ///
    /// The ID is percent-encoded so it always stays a single path segment.
    #[must_use]
    pub fn entity_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource, urlencoding::encode(id))
    }

    /// Returns the collection path with an `operation` query suffix.
    #[must_use]
    pub fn operation_path(&self, operation: &str) -> String {
        format!("{}?operation={operation}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_built_from_resource() {
        let descriptor = ResourceDescriptor::new("invoice", "Invoice", true);

        assert_eq!(descriptor.entity_path("130"), "invoice/130");
        assert_eq!(
            descriptor.operation_path("delete"),
            "invoice?operation=delete"
        );
    }

    #[test]
    fn test_nested_resource_paths() {
        let descriptor = ResourceDescriptor::new(
            String::from("taxservice/taxcode"),
            "TaxService",
            false,
        );

        assert_eq!(descriptor.resource(), "taxservice/taxcode");
        assert_eq!(descriptor.entity_path("3"), "taxservice/taxcode/3");
        assert!(!descriptor.response_has_root());
    }

    #[test]
    fn test_entity_path_encodes_id() {
        let descriptor = ResourceDescriptor::new("invoice", "Invoice", true);

        assert_eq!(descriptor.entity_path("a/b?c#d"), "invoice/a%2Fb%3Fc%23d");
        assert_eq!(descriptor.entity_path("12 3"), "invoice/12%203");
    }
}
