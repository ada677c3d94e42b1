use chrono::NaiveDate;
use serde_json::Value;

use crate::builders::builder::{date_value, impl_builder};
use crate::builders::{Builder, BuilderCore, HasCustomer, Itemizable};

/// Builder for `Estimate` request bodies.
#[derive(Clone, Debug)]
pub struct Estimate<'c> {
    core: BuilderCore<'c>,
}

impl_builder!(Estimate, "Estimate");

impl<'c> HasCustomer<'c> for Estimate<'c> {}
impl<'c> Itemizable<'c> for Estimate<'c> {}

impl<'c> Estimate<'c> {
    #[must_use]
    pub fn set_txn_date(self, date: NaiveDate) -> Self {
        self.set(&["TxnDate"], date_value(date))
    }

    /// Sets `ExpirationDate`, the date after which the estimate lapses.
    #[must_use]
    pub fn set_expiration_date(self, date: NaiveDate) -> Self {
        self.set(&["ExpirationDate"], date_value(date))
    }

    #[must_use]
    pub fn set_doc_number(self, number: impl Into<String>) -> Self {
        self.set(&["DocNumber"], Value::String(number.into()))
    }

    #[must_use]
    pub fn set_customer_memo(self, memo: impl Into<String>) -> Self {
        self.set(&["CustomerMemo", "value"], Value::String(memo.into()))
    }

    /// Sets `AcceptedBy`, the name of the person who accepted the estimate.
    #[must_use]
    pub fn set_accepted_by(self, name: impl Into<String>) -> Self {
        self.set(&["AcceptedBy"], Value::String(name.into()))
    }
}
