use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker shared by every JSON payload the API returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Generic payload for requests that fail before a complaint is drafted
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    pub fn error(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            errors,
        }
    }
}
