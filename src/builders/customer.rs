use serde_json::Value;

use crate::builders::builder::impl_builder;
use crate::builders::{Builder, BuilderCore};

/// Builder for `Customer` request bodies.
///
/// `DisplayName` must be unique across customers, vendors and employees;
/// QuickBooks rejects duplicates with a validation fault.
#[derive(Clone, Debug)]
pub struct Customer<'c> {
    core: BuilderCore<'c>,
}

impl_builder!(Customer, "Customer");

impl<'c> Customer<'c> {
    #[must_use]
    pub fn set_display_name(self, name: impl Into<String>) -> Self {
        self.set(&["DisplayName"], Value::String(name.into()))
    }

    #[must_use]
    pub fn set_given_name(self, name: impl Into<String>) -> Self {
        self.set(&["GivenName"], Value::String(name.into()))
    }

    #[must_use]
    pub fn set_family_name(self, name: impl Into<String>) -> Self {
        self.set(&["FamilyName"], Value::String(name.into()))
    }

    #[must_use]
    pub fn set_company_name(self, name: impl Into<String>) -> Self {
        self.set(&["CompanyName"], Value::String(name.into()))
    }

    /// Sets `PrimaryEmailAddr.Address`.
    #[must_use]
    pub fn set_email(self, email: impl Into<String>) -> Self {
        self.set(&["PrimaryEmailAddr", "Address"], Value::String(email.into()))
    }

    /// Sets `PrimaryPhone.FreeFormNumber`.
    #[must_use]
    pub fn set_phone(self, phone: impl Into<String>) -> Self {
        self.set(&["PrimaryPhone", "FreeFormNumber"], Value::String(phone.into()))
    }
}
