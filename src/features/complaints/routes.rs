use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::complaints::handlers::submit_complaint;
use crate::features::complaints::services::ComplaintService;
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Create routes for the complaints feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/",
            // Allow body size up to MAX_IMAGE_SIZE + buffer for text fields and multipart overhead
            post(submit_complaint).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .with_state(service)
}
