pub mod checkout_service;
pub mod helper;
pub mod mappings;

pub use checkout_service::CheckoutService;
pub use helper::TwoCheckoutHelper;
