//! Capability traits shared by transaction builders.
//!
//! A builder opts into a capability with an empty `impl`; the behavior comes
//! from the trait's default methods:
//!
//! ```rust,ignore
//! impl<'c> HasCustomer<'c> for Invoice<'c> {}
//! impl<'c> Itemizable<'c> for Invoice<'c> {}
//! ```

use serde_json::Value;

use crate::builders::{Builder, Item};

/// Payload key holding a transaction's line items.
pub const LINE: &str = "Line";

/// A builder whose entity references a customer.
pub trait HasCustomer<'c>: Builder<'c> {
    /// Sets `CustomerRef.value`.
    #[must_use]
    fn set_customer(self, id: impl Into<String>) -> Self {
        self.set(&["CustomerRef", "value"], Value::String(id.into()))
    }
}

/// A builder whose entity carries an ordered `Line` sequence.
///
/// # Example
///
/// ```rust,ignore
/// use quickbooks_api::builders::{Builder, HasCustomer, Itemizable};
///
/// let invoice = client.builder::<quickbooks_api::builders::Invoice>();
/// let line = invoice.sales_line().set_item_ref("1").set_amount(100.0);
/// let payload = invoice.set_customer("58").add_item(line).build();
/// ```
pub trait Itemizable<'c>: Builder<'c> {
    /// Appends the built payload of `item` to `Line`.
    #[must_use]
    fn add_item<B: Builder<'c>>(mut self, item: B) -> Self {
        self.payload_mut().push(&[LINE], item.build());
        self
    }

    /// Appends every builder of `items` to `Line`, in iteration order.
    #[must_use]
    fn add_items<B, I>(self, items: I) -> Self
    where
        B: Builder<'c>,
        I: IntoIterator<Item = B>,
    {
        items
            .into_iter()
            .fold(self, |builder, item| builder.add_item(item))
    }

    /// Returns the lines added so far.
    #[must_use]
    fn items<'s>(&'s self) -> &'s [Value]
    where
        'c: 's,
    {
        self.payload()
            .get(&[LINE])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns an empty line builder from this builder's client.
    #[must_use]
    fn line_builder(&self) -> Item<'c> {
        self.client().item_builder()
    }

    /// Returns a line builder marked as a sales item line.
    #[must_use]
    fn sales_line(&self) -> Item<'c> {
        self.line_builder().as_sales_item()
    }

    /// Returns a line builder marked as a discount line.
    #[must_use]
    fn discount_line(&self) -> Item<'c> {
        self.line_builder().as_discount()
    }

    /// Returns a line builder marked as a subtotal line.
    #[must_use]
    fn subtotal_line(&self) -> Item<'c> {
        self.line_builder().as_subtotal()
    }
}
