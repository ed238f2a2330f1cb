pub mod checkout_request;
pub mod field_map;
pub mod options;
pub mod redirect_form;

pub use checkout_request::{CheckoutRequest, Params};
pub use field_map::FieldMap;
pub use options::HelperOptions;
pub use redirect_form::{RedirectForm, FORM_METHOD};
