use serde::{Deserialize, Serialize};

/// Body of every failed proxy call.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }

    pub fn with_details(error: &str, details: String) -> Self {
        Self {
            error: error.to_string(),
            details: Some(details),
        }
    }
}
