use crate::core::{AppError, IntegrationMode, Result};
use serde::Deserialize;

/// Hosted checkout page the redirect form posts to
pub const DEFAULT_SERVICE_URL: &str = "https://www.2checkout.com/checkout/purchase";

/// Checkout settings shared by every form built in this process
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Mode used when a checkout carries no explicit test override
    #[serde(default)]
    pub mode: IntegrationMode,
    /// Vendor account (`sid`) used when a request does not name one
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default = "default_service_url")]
    pub service_url: String,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            mode: IntegrationMode::default(),
            account: None,
            service_url: default_service_url(),
        }
    }
}

impl CheckoutConfig {
    pub fn new(mode: IntegrationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.service_url.trim().is_empty() {
            return Err(AppError::configuration(
                "TWOCHECKOUT_SERVICE_URL must not be empty",
            ));
        }

        Ok(())
    }
}
