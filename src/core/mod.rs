pub mod amount;
pub mod error;
pub mod mode;

pub use amount::format_form_amount;
pub use error::{AppError, Result};
pub use mode::IntegrationMode;
