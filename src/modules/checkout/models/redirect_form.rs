use serde::{Deserialize, Serialize};

use super::FieldMap;

/// HTTP method the hosted checkout page is submitted with
pub const FORM_METHOD: &str = "POST";

/// Everything a caller needs to render the auto-submitted redirect form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectForm {
    pub service_url: String,
    pub method: String,
    pub fields: FieldMap,
}

impl RedirectForm {
    pub fn new(service_url: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            service_url: service_url.into(),
            method: FORM_METHOD.to_string(),
            fields,
        }
    }
}
