use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::builders::builder::{date_value, impl_builder};
use crate::builders::{Builder, BuilderCore, HasCustomer, Itemizable};

/// Builder for `Invoice` request bodies.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use quickbooks_api::builders::{Builder, HasCustomer, Invoice, Itemizable};
///
/// let invoice = client.builder::<Invoice>();
/// let hours = invoice.sales_line().set_item_ref("6").set_amount(150.0);
///
/// let payload = invoice
///     .set_customer("58")
///     .set_invoice_number("1042")
///     .set_due_date(NaiveDate::from_ymd_opt(2024, 4, 30).unwrap())
///     .add_item(hours)
///     .set_discount_percent(10.0)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct Invoice<'c> {
    core: BuilderCore<'c>,
}

impl_builder!(Invoice, "Invoice");

impl<'c> HasCustomer<'c> for Invoice<'c> {}
impl<'c> Itemizable<'c> for Invoice<'c> {}

impl<'c> Invoice<'c> {
    /// Sets `DueDate`.
    #[must_use]
    pub fn set_due_date(self, date: NaiveDate) -> Self {
        self.set(&["DueDate"], date_value(date))
    }

    /// Sets `TxnDate`, the invoice date.
    #[must_use]
    pub fn set_txn_date(self, date: NaiveDate) -> Self {
        self.set(&["TxnDate"], date_value(date))
    }

    /// Sets `DocNumber`.
    #[must_use]
    pub fn set_invoice_number(self, number: impl Into<String>) -> Self {
        self.set(&["DocNumber"], Value::String(number.into()))
    }

    /// Sets `BillAddr.Id`.
    #[must_use]
    pub fn set_billing_address_id(self, id: impl Into<String>) -> Self {
        self.set(&["BillAddr", "Id"], Value::String(id.into()))
    }

    /// Sets `ShipAddr.Id`.
    #[must_use]
    pub fn set_shipping_address_id(self, id: impl Into<String>) -> Self {
        self.set(&["ShipAddr", "Id"], Value::String(id.into()))
    }

    /// Sets the transaction-level tax code, `TxnTaxDetail.TxnTaxCodeRef.value`.
    #[must_use]
    pub fn set_tax_code_ref(self, tax_code: impl Into<String>) -> Self {
        self.set(&["TxnTaxDetail", "TxnTaxCodeRef", "value"], Value::String(tax_code.into()))
    }

    /// Sets `TxnTaxDetail.TaxLine` to a single tax line taxing `amount` at
    /// the rate `tax_rate_id`.
    ///
    /// Each call replaces the whole `TaxLine` sequence; only the last call
    /// is kept. Set `TxnTaxDetail.TaxLine` through [`Builder::set`] to send
    /// several tax lines.
    #[must_use]
    pub fn add_taxable_amount(self, amount: f64, tax_rate_id: impl Into<String>) -> Self {
        let tax_line = json!({
            "DetailType": "TaxLineDetail",
            "TaxLineDetail": {
                "TaxRateRef": {"value": tax_rate_id.into()},
                "NetAmountTaxable": amount
            }
        });
        self.set(&["TxnTaxDetail", "TaxLine"], json!([tax_line]))
    }

    /// Appends a discount line of `percent` percent.
    #[must_use]
    pub fn set_discount_percent(self, percent: f64) -> Self {
        let discount = self.client().item_builder().as_discount().set_percent(percent);
        self.add_item(discount)
    }

    /// Appends a fixed-amount discount line of `value`.
    #[must_use]
    pub fn set_discount_value(self, value: f64) -> Self {
        let discount = self.client().item_builder().as_discount().set_value(value);
        self.add_item(discount)
    }

    /// Sets the message shown to the customer, `CustomerMemo.value`.
    #[must_use]
    pub fn set_customer_memo(self, memo: impl Into<String>) -> Self {
        self.set(&["CustomerMemo", "value"], Value::String(memo.into()))
    }

    /// Sets the address the invoice is emailed to, `BillEmail.Address`.
    #[must_use]
    pub fn set_bill_email(self, email: impl Into<String>) -> Self {
        self.set(&["BillEmail", "Address"], Value::String(email.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::test_client;
    use serde_json::json;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_setters_write_documented_paths() {
        let client = test_client();
        let payload = client
            .builder::<Invoice>()
            .set_due_date(date(2024, 4, 30))
            .set_txn_date(date(2024, 3, 31))
            .set_invoice_number("1042")
            .set_billing_address_id("12")
            .set_shipping_address_id("13")
            .set_tax_code_ref("TAX")
            .set_customer_memo("Thank you for your business")
            .set_bill_email("billing@example.com")
            .build();

        assert_eq!(
            payload,
            json!({
                "DueDate": "2024-04-30",
                "TxnDate": "2024-03-31",
                "DocNumber": "1042",
                "BillAddr": {"Id": "12"},
                "ShipAddr": {"Id": "13"},
                "TxnTaxDetail": {"TxnTaxCodeRef": {"value": "TAX"}},
                "CustomerMemo": {"value": "Thank you for your business"},
                "BillEmail": {"Address": "billing@example.com"}
            })
        );
    }

    #[test]
    fn test_add_taxable_amount_writes_single_tax_line() {
        let client = test_client();
        let payload = client
            .builder::<Invoice>()
            .add_taxable_amount(100.0, "3")
            .build();

        assert_eq!(
            payload["TxnTaxDetail"]["TaxLine"],
            json!([{
                "DetailType": "TaxLineDetail",
                "TaxLineDetail": {"TaxRateRef": {"value": "3"}, "NetAmountTaxable": 100.0}
            }])
        );
    }

    #[test]
    fn test_tax_code_and_tax_line_share_tax_detail() {
        let client = test_client();
        let payload = client
            .builder::<Invoice>()
            .set_tax_code_ref("TAX")
            .add_taxable_amount(80.0, "3")
            .build();

        assert_eq!(payload["TxnTaxDetail"]["TxnTaxCodeRef"]["value"], "TAX");
        assert_eq!(payload["TxnTaxDetail"]["TaxLine"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_discount_value_appends_fixed_discount_line() {
        let client = test_client();
        let payload = client.builder::<Invoice>().set_discount_value(25.0).build();

        assert_eq!(
            payload["Line"],
            json!([{
                "DetailType": "DiscountLineDetail",
                "DiscountLineDetail": {"PercentBased": false},
                "Amount": 25.0
            }])
        );
    }

    #[test]
    fn test_customer_capability() {
        let client = test_client();
        let payload = client.builder::<Invoice>().set_customer("58").build();

        assert_eq!(payload, json!({"CustomerRef": {"value": "58"}}));
    }
}
