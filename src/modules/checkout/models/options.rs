use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{format_form_amount, IntegrationMode};

/// Options a checkout helper is constructed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperOptions {
    /// Sale total, passed through verbatim
    pub amount: String,

    /// Currency code, passed through verbatim
    pub currency: String,

    /// Per-checkout override of the integration mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Mode used when `test` is not set
    #[serde(default)]
    pub integration_mode: IntegrationMode,
}

impl HelperOptions {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            test: None,
            integration_mode: IntegrationMode::default(),
        }
    }

    /// Builds options from a decimal amount, rendered with two decimal places
    pub fn from_decimal(amount: Decimal, currency: impl Into<String>) -> Self {
        Self::new(format_form_amount(amount), currency)
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = Some(test);
        self
    }

    pub fn integration_mode(mut self, mode: IntegrationMode) -> Self {
        self.integration_mode = mode;
        self
    }

    /// Effective mode after applying the per-checkout override
    pub fn effective_mode(&self) -> IntegrationMode {
        self.integration_mode.resolve(self.test)
    }
}
