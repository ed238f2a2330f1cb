// Hosted checkout redirect module

pub mod models;
pub mod services;

pub use models::{CheckoutRequest, FieldMap, HelperOptions, Params, RedirectForm};
pub use services::{mappings, CheckoutService, TwoCheckoutHelper};
