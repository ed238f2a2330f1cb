// End-to-end checkout form building
//
// Decodes storefront JSON requests and checks the finished redirect form.

use checkout_redirect::checkout::{CheckoutRequest, CheckoutService};
use checkout_redirect::config::{CheckoutConfig, DEFAULT_SERVICE_URL};
use checkout_redirect::core::{AppError, IntegrationMode};
use serde_json::json;

fn service(mode: IntegrationMode) -> CheckoutService {
    CheckoutService::new(CheckoutConfig::new(mode).with_account("1303908"))
}

#[test]
fn test_full_checkout_request() {
    let request: CheckoutRequest = serde_json::from_value(json!({
        "order": "order-500",
        "account": "cody@example.com",
        "amount": "5.00",
        "currency": "USD",
        "customer": {
            "first_name": "Cody",
            "last_name": "Fauser",
            "email": "cody@example.com",
            "phone": "(555)555-5555",
            "company": "Shopify"
        },
        "billing_address": {
            "address1": "1 My Street",
            "city": "Leeds",
            "country": "CA",
            "farm": "CA"
        },
        "shipping_address": {
            "name": "Testing Tester",
            "city": "London"
        },
        "line_items": [
            { "prod": "1,1", "name": "Example Product Name" },
            { "description": "Example Product Description", "price": "15.0" }
        ],
        "invoice": "123",
        "return_url": "https://return.url/",
        "notify_url": "https://notify.url/",
        "cart_type": "shopify",
        "purchase_step": "payment-method"
    }))
    .unwrap();

    let form = service(IntegrationMode::Test).build_form(&request).unwrap();

    assert_eq!(form.service_url, DEFAULT_SERVICE_URL);
    assert_eq!(form.method, "POST");

    let fields = serde_json::to_value(&form.fields).unwrap();
    assert_eq!(
        fields,
        json!({
            "sid": "cody@example.com",
            "total": "5.00",
            "merchant_order_id": "order-500",
            "currency_code": "USD",
            "demo": "Y",
            "card_holder_name": "Cody Fauser",
            "email": "cody@example.com",
            "phone": "(555)555-5555",
            "street_address": "1 My Street",
            "city": "Leeds",
            "country": "CA",
            "ship_name": "Testing Tester",
            "ship_city": "London",
            "c_prod_1": "1,1",
            "c_name_1": "Example Product Name",
            "c_description_2": "Example Product Description",
            "c_price_2": "15.0",
            "cart_order_id": "123",
            "x_receipt_link_url": "https://return.url/",
            "notify_url": "https://notify.url/",
            "2co_cart_type": "shopify",
            "purchase_step": "payment-method"
        })
    );
}

#[test]
fn test_request_test_flag_overrides_production() {
    let request: CheckoutRequest = serde_json::from_value(json!({
        "order": "order-500",
        "amount": "5.00",
        "currency": "USD",
        "test": true
    }))
    .unwrap();

    let form = service(IntegrationMode::Production).build_form(&request).unwrap();
    assert_eq!(form.fields.get("demo"), Some("Y"));
    assert_eq!(form.fields.get("sid"), Some("1303908"));
}

#[test]
fn test_production_request_has_no_demo_field() {
    let request: CheckoutRequest = serde_json::from_value(json!({
        "order": "order-500",
        "amount": "5.00",
        "currency": "USD"
    }))
    .unwrap();

    let form = service(IntegrationMode::Production).build_form(&request).unwrap();
    assert!(!form.fields.contains_key("demo"));
    assert_eq!(form.fields.len(), 4);
}

#[test]
fn test_request_without_account_fails() {
    let request: CheckoutRequest = serde_json::from_value(json!({
        "order": "order-500",
        "amount": "5.00",
        "currency": "USD"
    }))
    .unwrap();

    let service = CheckoutService::new(CheckoutConfig::default());
    let err = service.build_form(&request).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("order-500"));
}

#[test]
fn test_redirect_form_serialization() {
    let request: CheckoutRequest = serde_json::from_value(json!({
        "order": "order-500",
        "amount": "5.00",
        "currency": "USD"
    }))
    .unwrap();

    let form = service(IntegrationMode::Test).build_form(&request).unwrap();
    let value = serde_json::to_value(&form).unwrap();

    assert_eq!(value["method"], "POST");
    assert_eq!(value["service_url"], DEFAULT_SERVICE_URL);
    assert_eq!(value["fields"]["merchant_order_id"], "order-500");
}
