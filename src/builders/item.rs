use serde_json::Value;

use crate::builders::builder::impl_builder;
use crate::builders::{Builder, BuilderCore};

const DETAIL_TYPE: &str = "DetailType";
const SALES_ITEM_DETAIL: &str = "SalesItemLineDetail";
const DISCOUNT_DETAIL: &str = "DiscountLineDetail";
const SUBTOTAL_DETAIL: &str = "SubTotalLineDetail";
const DESCRIPTION_ONLY: &str = "DescriptionOnly";

/// Builder for one transaction line.
///
/// A line's kind is its `DetailType`; kind-specific fields live under the
/// matching detail object (`SalesItemLineDetail`, `DiscountLineDetail`, ...).
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::builders::Builder;
///
/// let discount = client.item_builder().as_discount().set_percent(10.0).build();
/// assert_eq!(discount["DetailType"], "DiscountLineDetail");
/// assert_eq!(discount["DiscountLineDetail"]["PercentBased"], true);
/// ```
#[derive(Clone, Debug)]
pub struct Item<'c> {
    core: BuilderCore<'c>,
}

impl_builder!(Item, "Item");

impl<'c> Item<'c> {
    /// Marks the line as a sales item line.
    #[must_use]
    pub fn as_sales_item(self) -> Self {
        self.set(&[DETAIL_TYPE], SALES_ITEM_DETAIL)
    }

    /// Marks the line as a discount line.
    #[must_use]
    pub fn as_discount(self) -> Self {
        self.set(&[DETAIL_TYPE], DISCOUNT_DETAIL)
    }

    /// Marks the line as a subtotal line.
    #[must_use]
    pub fn as_subtotal(self) -> Self {
        self.set(&[DETAIL_TYPE], SUBTOTAL_DETAIL)
    }

    /// Marks the line as a description-only line.
    #[must_use]
    pub fn as_description_only(self) -> Self {
        self.set(&[DETAIL_TYPE], DESCRIPTION_ONLY)
    }

    /// Makes the line a percentage discount of `percent`.
    #[must_use]
    pub fn set_percent(self, percent: f64) -> Self {
        self.set(&[DISCOUNT_DETAIL, "PercentBased"], true)
            .set(&[DISCOUNT_DETAIL, "DiscountPercent"], percent)
    }

    /// Makes the line a fixed-amount discount of `value`.
    #[must_use]
    pub fn set_value(self, value: f64) -> Self {
        self.set(&[DISCOUNT_DETAIL, "PercentBased"], false)
            .set(&["Amount"], value)
    }

    /// Sets the discount's income account.
    #[must_use]
    pub fn set_discount_account_ref(self, account_id: impl Into<String>) -> Self {
        self.set(
            &[DISCOUNT_DETAIL, "DiscountAccountRef", "value"],
            Value::String(account_id.into()),
        )
    }

    /// Sets the line `Amount`.
    #[must_use]
    pub fn set_amount(self, amount: f64) -> Self {
        self.set(&["Amount"], amount)
    }

    #[must_use]
    pub fn set_description(self, description: impl Into<String>) -> Self {
        self.set(&["Description"], Value::String(description.into()))
    }

    /// Sets `LineNum`, the line's position on printed forms.
    #[must_use]
    pub fn set_line_number(self, line_number: u32) -> Self {
        self.set(&["LineNum"], line_number)
    }

    /// Sets the product or service sold on this line.
    #[must_use]
    pub fn set_item_ref(self, item_id: impl Into<String>) -> Self {
        self.set(&[SALES_ITEM_DETAIL, "ItemRef", "value"], Value::String(item_id.into()))
    }

    #[must_use]
    pub fn set_quantity(self, quantity: f64) -> Self {
        self.set(&[SALES_ITEM_DETAIL, "Qty"], quantity)
    }

    #[must_use]
    pub fn set_unit_price(self, unit_price: f64) -> Self {
        self.set(&[SALES_ITEM_DETAIL, "UnitPrice"], unit_price)
    }

    /// Sets the line's tax code (e.g., `"TAX"` or `"NON"` in US companies).
    #[must_use]
    pub fn set_tax_code_ref(self, tax_code: impl Into<String>) -> Self {
        self.set(&[SALES_ITEM_DETAIL, "TaxCodeRef", "value"], Value::String(tax_code.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::test_client;
    use serde_json::json;

    #[test]
    fn test_percent_discount_line() {
        let client = test_client();
        let line = client.item_builder().as_discount().set_percent(10.0).build();

        assert_eq!(
            line,
            json!({
                "DetailType": "DiscountLineDetail",
                "DiscountLineDetail": {"PercentBased": true, "DiscountPercent": 10.0}
            })
        );
    }

    #[test]
    fn test_value_discount_line() {
        let client = test_client();
        let line = client
            .item_builder()
            .as_discount()
            .set_value(15.5)
            .set_discount_account_ref("86")
            .build();

        assert_eq!(line["DiscountLineDetail"]["PercentBased"], json!(false));
        assert_eq!(line["Amount"].as_f64(), Some(15.5));
        assert_eq!(line["DiscountLineDetail"]["DiscountAccountRef"]["value"], "86");
    }

    #[test]
    fn test_switching_discount_kind_keeps_last_flag() {
        let client = test_client();
        let line = client
            .item_builder()
            .set_percent(5.0)
            .set_value(20.0)
            .build();

        assert_eq!(line["DiscountLineDetail"]["PercentBased"], json!(false));
    }

    #[test]
    fn test_sales_item_line() {
        let client = test_client();
        let line = client
            .item_builder()
            .as_sales_item()
            .set_line_number(1)
            .set_description("Gardening, hourly")
            .set_item_ref("6")
            .set_quantity(4.0)
            .set_unit_price(25.0)
            .set_tax_code_ref("NON")
            .set_amount(100.0)
            .build();

        assert_eq!(line["DetailType"], "SalesItemLineDetail");
        assert_eq!(line["LineNum"], 1);
        assert_eq!(line["SalesItemLineDetail"]["ItemRef"]["value"], "6");
        assert_eq!(line["SalesItemLineDetail"]["Qty"].as_f64(), Some(4.0));
        assert_eq!(line["SalesItemLineDetail"]["UnitPrice"].as_f64(), Some(25.0));
        assert_eq!(line["SalesItemLineDetail"]["TaxCodeRef"]["value"], "NON");
        assert_eq!(line["Amount"].as_f64(), Some(100.0));
    }

    #[test]
    fn test_detail_type_last_write_wins() {
        let client = test_client();
        let line = client
            .item_builder()
            .as_subtotal()
            .as_description_only()
            .build();

        assert_eq!(line, json!({"DetailType": "DescriptionOnly"}));
    }
}
