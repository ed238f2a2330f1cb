use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment a checkout form is built for
///
/// In `Test` mode the gateway is told to run a demo sale and no card is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMode {
    #[default]
    Test,
    Production,
}

impl IntegrationMode {
    /// Resolves the effective mode from an optional per-checkout override
    ///
    /// `Some(true)` forces test mode, `Some(false)` forces production, `None`
    /// keeps `self`.
    pub fn resolve(self, test_override: Option<bool>) -> Self {
        match test_override {
            Some(true) => IntegrationMode::Test,
            Some(false) => IntegrationMode::Production,
            None => self,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, IntegrationMode::Test)
    }
}

impl fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMode::Test => write!(f, "test"),
            IntegrationMode::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for IntegrationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(IntegrationMode::Test),
            "production" => Ok(IntegrationMode::Production),
            _ => Err(format!("Invalid integration mode: {}", s)),
        }
    }
}

impl TryFrom<&str> for IntegrationMode {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
