//! Field names of the hosted checkout form and the translation tables from
//! caller attribute names to those fields.

pub const ACCOUNT: &str = "sid";
pub const AMOUNT: &str = "total";
pub const ORDER: &str = "merchant_order_id";
pub const CURRENCY: &str = "currency_code";
pub const INVOICE: &str = "cart_order_id";
pub const NOTIFY_URL: &str = "notify_url";
pub const RETURN_URL: &str = "x_receipt_link_url";
pub const CART_TYPE: &str = "2co_cart_type";
pub const PURCHASE_STEP: &str = "purchase_step";
pub const CARD_HOLDER_NAME: &str = "card_holder_name";

/// Demo-sale marker and the value that switches it on
pub const DEMO: &str = "demo";
pub const DEMO_ENABLED: &str = "Y";

/// Attribute -> field translation table
pub type Mapping = &'static [(&'static str, &'static str)];

/// Customer attributes written straight through; names are combined separately
pub const CUSTOMER: Mapping = &[("email", "email"), ("phone", "phone")];

pub const BILLING_ADDRESS: Mapping = &[
    ("address1", "street_address"),
    ("address2", "street_address2"),
    ("city", "city"),
    ("state", "state"),
    ("zip", "zip"),
    ("country", "country"),
];

pub const SHIPPING_ADDRESS: Mapping = &[
    ("name", "ship_name"),
    ("address1", "ship_street_address"),
    ("city", "ship_city"),
    ("state", "ship_state"),
    ("zip", "ship_zip"),
    ("country", "ship_country"),
];

/// Third party cart attributes; the field is `<prefix><line item index>`
pub const THIRD_PARTY_CART: Mapping = &[
    ("prod", "c_prod_"),
    ("name", "c_name_"),
    ("description", "c_description_"),
    ("price", "c_price_"),
];

/// Looks up the target field for `key` in `mapping`
pub fn translate(mapping: Mapping, key: &str) -> Option<&'static str> {
    mapping
        .iter()
        .find(|(attribute, _)| *attribute == key)
        .map(|(_, field)| *field)
}

/// Field name of a third party cart attribute for line item `index`
pub fn line_item_field(key: &str, index: usize) -> Option<String> {
    translate(THIRD_PARTY_CART, key).map(|prefix| format!("{}{}", prefix, index))
}
