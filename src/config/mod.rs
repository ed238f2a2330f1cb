use crate::core::{AppError, IntegrationMode, Result};
use serde::Deserialize;
use std::env;

pub mod checkout;

pub use checkout::{CheckoutConfig, DEFAULT_SERVICE_URL};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mode = parse_mode(env::var("INTEGRATION_MODE").ok())?;

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            checkout: CheckoutConfig {
                mode,
                account: env::var("TWOCHECKOUT_SID").ok().filter(|sid| !sid.trim().is_empty()),
                service_url: env::var("TWOCHECKOUT_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.log_level.trim().is_empty() {
            return Err(AppError::configuration("LOG_LEVEL must not be empty"));
        }

        self.checkout.validate()
    }
}

/// Parses `INTEGRATION_MODE`, defaulting to test mode when it is unset
pub fn parse_mode(raw: Option<String>) -> Result<IntegrationMode> {
    match raw {
        Some(raw) => raw.parse::<IntegrationMode>().map_err(AppError::Configuration),
        None => Ok(IntegrationMode::default()),
    }
}
