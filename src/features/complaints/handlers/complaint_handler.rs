use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::complaints::dtos::{
    ComplaintResponseDto, ComplaintSubmission, SubmitComplaintDto, UploadedImage,
};
use crate::features::complaints::services::ComplaintService;
use crate::shared::constants::MAX_IMAGE_SIZE;
use crate::shared::types::ApiResponse;

/// Submit a citizen complaint
///
/// Accepts multipart/form-data with:
/// - `name`, `email`, `location`, `complaint`: required text fields
/// - `image`: optional photo, forwarded as an attachment
///
/// The drafted email is returned in `email_body` whether or not delivery succeeded.
#[utoipa::path(
    post,
    path = "/",
    tag = "complaints",
    request_body(
        content = SubmitComplaintDto,
        content_type = "multipart/form-data",
        description = "Complaint form with an optional image",
    ),
    responses(
        (status = 200, description = "Email drafted; `status` tells whether it was delivered", body = ComplaintResponseDto),
        (status = 400, description = "Missing required fields or unreadable form", body = ApiResponse),
        (status = 413, description = "Image or request body too large", body = ApiResponse),
        (status = 502, description = "Text-generation provider failed", body = ApiResponse)
    )
)]
pub async fn submit_complaint(
    State(service): State<Arc<ComplaintService>>,
    mut multipart: Multipart,
) -> Result<Json<ComplaintResponseDto>, AppError> {
    let mut submission = ComplaintSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart data", e))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => submission.name = read_text(field, "name").await?,
            "email" => submission.email = read_text(field, "email").await?,
            "location" => submission.location = read_text(field, "location").await?,
            "complaint" => submission.complaint = read_text(field, "complaint").await?,
            "image" => submission.image = read_image(field).await?,
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let response = service.submit(submission).await?;

    Ok(Json(response))
}

/// Keep the body limit's 413; everything else is a malformed form.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    debug!("{}: {}", context, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Request body too large. Maximum image size is {} MB",
            MAX_IMAGE_SIZE / 1024 / 1024
        ))
    } else {
        AppError::BadRequest(format!("{}: {}", context, e))
    }
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| multipart_error(&format!("Failed to read {} field", name), e))
}

/// Browsers send an empty, nameless part when no file was chosen; that counts as no image.
async fn read_image(field: Field<'_>) -> Result<Option<UploadedImage>, AppError> {
    let file_name = field
        .file_name()
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());

    let data = field
        .bytes()
        .await
        .map_err(|e| multipart_error("Failed to read image data", e))?;

    if data.is_empty() && file_name.is_none() {
        return Ok(None);
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::PayloadTooLarge(format!(
            "Image too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    Ok(Some(UploadedImage {
        file_name,
        bytes: data.to_vec(),
    }))
}
