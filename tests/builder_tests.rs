//! Integration tests for payload builders.
//!
//! These tests verify last-write-wins setters, line composition through
//! capability traits, and the replace semantics of invoice tax lines.

use chrono::NaiveDate;
use quickbooks_api::builders::{
    AnyBuilder, Builder, Estimate, HasCustomer, Invoice, Itemizable, Payload,
};
use quickbooks_api::{AccessToken, Client, QuickbooksConfig, RealmId};
use serde_json::{json, Value};

fn create_client() -> Client {
    let config = QuickbooksConfig::builder()
        .realm_id(RealmId::new("123").unwrap())
        .access_token(AccessToken::new("test-access-token").unwrap())
        .build()
        .unwrap();
    Client::new(&config)
}

// ============================================================================
// Setter semantics
// ============================================================================

#[test]
fn test_setting_a_path_twice_keeps_last_value() {
    let client = create_client();
    let payload = client
        .builder::<Invoice>()
        .set_invoice_number("1001")
        .set_due_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .set_invoice_number("1002")
        .set_due_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        .set_customer("1")
        .set_customer("2")
        .build();

    assert_eq!(
        payload,
        json!({
            "DocNumber": "1002",
            "DueDate": "2024-02-29",
            "CustomerRef": {"value": "2"}
        })
    );
}

#[test]
fn test_setters_are_order_independent() {
    let client = create_client();
    let first = client
        .builder::<Invoice>()
        .set_customer("58")
        .set_tax_code_ref("TAX")
        .set_billing_address_id("4")
        .build();
    let second = client
        .builder::<Invoice>()
        .set_billing_address_id("4")
        .set_tax_code_ref("TAX")
        .set_customer("58")
        .build();

    assert_eq!(first, second);
}

#[test]
fn test_built_payload_round_trips_through_serialization() {
    let client = create_client();
    let invoice = client.builder::<Invoice>();
    let line = invoice
        .sales_line()
        .set_item_ref("1")
        .set_quantity(2.0)
        .set_unit_price(12.5)
        .set_amount(25.0);
    let payload = invoice
        .set_customer("58")
        .add_item(line)
        .add_taxable_amount(25.0, "3")
        .set_shipping_address_id("8")
        .build();

    let text = serde_json::to_string(&payload).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, payload);

    let seeded = Payload::try_from(parsed).unwrap();
    let rebuilt = Invoice::from_payload(&client, seeded).build();
    assert_eq!(rebuilt, payload);
}

// ============================================================================
// Tax lines
// ============================================================================

#[test]
fn test_add_taxable_amount_replaces_previous_tax_line() {
    let client = create_client();
    let payload = client
        .builder::<Invoice>()
        .add_taxable_amount(100.0, "TAX1")
        .add_taxable_amount(50.0, "TAX2")
        .build();

    let tax_lines = payload["TxnTaxDetail"]["TaxLine"].as_array().unwrap();
    assert_eq!(tax_lines.len(), 1);
    assert_eq!(
        tax_lines[0]["TaxLineDetail"]["NetAmountTaxable"].as_f64(),
        Some(50.0)
    );
    assert_eq!(tax_lines[0]["TaxLineDetail"]["TaxRateRef"]["value"], "TAX2");
}

// ============================================================================
// Line composition
// ============================================================================

#[test]
fn test_discount_percent_appends_one_discount_line_after_existing_items() {
    let client = create_client();
    let invoice = client.builder::<Invoice>();
    let first = invoice.sales_line().set_item_ref("1").set_amount(100.0);
    let second = invoice.sales_line().set_item_ref("2").set_amount(40.0);

    let invoice = invoice.add_items([first, second]);
    assert_eq!(invoice.items().len(), 2);

    let invoice = invoice.set_discount_percent(10.0);
    let items = invoice.items();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["SalesItemLineDetail"]["ItemRef"]["value"], "1");
    assert_eq!(items[1]["SalesItemLineDetail"]["ItemRef"]["value"], "2");
    assert_eq!(items[2]["DetailType"], "DiscountLineDetail");
    assert_eq!(items[2]["DiscountLineDetail"]["PercentBased"], true);
    assert_eq!(
        items[2]["DiscountLineDetail"]["DiscountPercent"].as_f64(),
        Some(10.0)
    );
}

#[test]
fn test_discount_lines_are_built_from_the_hosts_client() {
    let client = create_client();
    let invoice = client.builder::<Invoice>();
    let line = invoice.discount_line();

    assert!(std::ptr::eq(line.client(), &client));
    assert!(std::ptr::eq(invoice.client(), &client));
}

#[test]
fn test_items_can_be_shared_across_transaction_builders() {
    let client = create_client();
    let estimate = client
        .builder::<Estimate>()
        .set_customer("3")
        .add_item(client.item_builder().as_sales_item().set_amount(75.0))
        .add_item(client.item_builder().as_subtotal())
        .build();

    let lines = estimate["Line"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["Amount"].as_f64(), Some(75.0));
    assert_eq!(lines[1]["DetailType"], "SubTotalLineDetail");
}

#[test]
fn test_resolved_builder_converts_to_concrete_builder() {
    let client = create_client();
    let any = client.resolve_builder("Estimate").unwrap();
    assert_eq!(any.name(), "Estimate");

    let estimate = Estimate::try_from(any).unwrap();
    let payload = estimate.set_customer("9").build();
    assert_eq!(payload, json!({"CustomerRef": {"value": "9"}}));

    let any = AnyBuilder::from(client.builder::<Invoice>());
    assert!(Estimate::try_from(any).is_err());
}
