use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::shared::types::ResponseStatus;

/// Multipart field names that must carry a non-blank value
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "location", "complaint"];

/// Complaint form request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SubmitComplaintDto {
    /// Citizen's name
    #[schema(example = "Asha")]
    pub name: String,
    /// Citizen's contact email, quoted in the drafted email
    #[schema(example = "asha@example.com")]
    pub email: String,
    /// Where the issue is
    #[schema(example = "Dadar")]
    pub location: String,
    /// Free-text description of the issue
    #[schema(example = "Garbage not collected for a week")]
    pub complaint: String,
    /// Optional photo, forwarded as an attachment
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

/// Photo uploaded alongside a complaint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// One citizen submission. Lives only for the duration of a request.
#[derive(Debug, Clone, Default, Validate)]
pub struct ComplaintSubmission {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "location is required"))]
    pub location: String,
    #[validate(custom(function = "not_blank", message = "complaint is required"))]
    pub complaint: String,
    pub image: Option<UploadedImage>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ComplaintSubmission {
    /// Names of required fields that are missing or blank, in form order.
    pub fn missing_fields(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let field_errors = errors.field_errors();
                REQUIRED_FIELDS
                    .iter()
                    .filter(|field| field_errors.contains_key(**field))
                    .map(|field| field.to_string())
                    .collect()
            }
        }
    }
}

/// Result of a complaint submission.
///
/// `email_body` is returned whether or not delivery succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintResponseDto {
    pub status: ResponseStatus,
    #[schema(example = "Email sent successfully")]
    pub message: String,
    /// Email text drafted by the text-generation provider
    pub email_body: String,
}

impl ComplaintResponseDto {
    pub fn sent(email_body: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: "Email sent successfully".to_string(),
            email_body,
        }
    }

    pub fn failed(email_body: String, reason: impl std::fmt::Display) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: format!("Failed to send email ({})", reason),
            email_body,
        }
    }
}
