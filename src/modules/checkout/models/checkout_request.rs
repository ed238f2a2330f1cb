use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Loosely structured input, keyed by the caller's attribute names
pub type Params = BTreeMap<String, String>;

/// A complete checkout as submitted by a storefront
///
/// Structured sections are free-form maps: keys the gateway has no field for
/// are dropped while the form is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order: String,
    #[serde(default)]
    pub account: Option<String>,
    pub amount: String,
    pub currency: String,
    #[serde(default)]
    pub test: Option<bool>,

    #[serde(default)]
    pub customer: Option<Params>,
    #[serde(default)]
    pub billing_address: Option<Params>,
    #[serde(default)]
    pub shipping_address: Option<Params>,
    #[serde(default)]
    pub line_items: Vec<Params>,

    #[serde(default)]
    pub invoice: Option<String>,
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub notify_url: Option<String>,
    #[serde(default)]
    pub cart_type: Option<String>,
    #[serde(default)]
    pub purchase_step: Option<String>,
}
