use chrono::NaiveDate;
use serde_json::Value;

use crate::builders::builder::{date_value, impl_builder};
use crate::builders::{Builder, BuilderCore, HasCustomer, Itemizable};

/// Builder for `SalesReceipt` request bodies.
#[derive(Clone, Debug)]
pub struct SalesReceipt<'c> {
    core: BuilderCore<'c>,
}

impl_builder!(SalesReceipt, "SalesReceipt");

impl<'c> HasCustomer<'c> for SalesReceipt<'c> {}
impl<'c> Itemizable<'c> for SalesReceipt<'c> {}

impl<'c> SalesReceipt<'c> {
    #[must_use]
    pub fn set_txn_date(self, date: NaiveDate) -> Self {
        self.set(&["TxnDate"], date_value(date))
    }

    #[must_use]
    pub fn set_doc_number(self, number: impl Into<String>) -> Self {
        self.set(&["DocNumber"], Value::String(number.into()))
    }

    /// Sets the account the payment is deposited to.
    #[must_use]
    pub fn set_deposit_account_ref(self, account_id: impl Into<String>) -> Self {
        self.set(&["DepositToAccountRef", "value"], Value::String(account_id.into()))
    }

    /// Sets how the customer paid (cash, check, card, ...).
    #[must_use]
    pub fn set_payment_method_ref(self, payment_method_id: impl Into<String>) -> Self {
        self.set(&["PaymentMethodRef", "value"], Value::String(payment_method_id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::test_client;

    #[test]
    fn test_sales_receipt_paths() {
        let client = test_client();
        let payload = client
            .builder::<SalesReceipt>()
            .set_customer("7")
            .set_txn_date(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
            .set_doc_number("SR-9")
            .set_deposit_account_ref("35")
            .set_payment_method_ref("1")
            .build();

        assert_eq!(payload["CustomerRef"]["value"], "7");
        assert_eq!(payload["TxnDate"], "2024-06-02");
        assert_eq!(payload["DocNumber"], "SR-9");
        assert_eq!(payload["DepositToAccountRef"]["value"], "35");
        assert_eq!(payload["PaymentMethodRef"]["value"], "1");
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let client = test_client();
        let receipt = client.builder::<SalesReceipt>();
        let first = receipt.sales_line().set_line_number(1);
        let subtotal = receipt.subtotal_line();
        let discount = receipt.discount_line().set_value(5.0);

        let receipt = receipt.add_items([first, subtotal, discount]);
        let kinds: Vec<&str> = receipt
            .items()
            .iter()
            .filter_map(|line| line["DetailType"].as_str())
            .collect();

        assert_eq!(
            kinds,
            vec!["SalesItemLineDetail", "SubTotalLineDetail", "DiscountLineDetail"]
        );
    }
}
