//! Checkout Redirect Library
//!
//! Builds the hidden form fields for sending a buyer to a hosted 2Checkout
//! payment page.

pub mod config;
pub mod core;
pub mod modules;

// Re-export the checkout module at the crate root
pub use modules::checkout;
