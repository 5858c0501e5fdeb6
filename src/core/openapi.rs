use utoipa::{Modify, OpenApi};

use crate::features::complaints::{dtos as complaints_dtos, handlers as complaints_handlers};
use crate::shared::types::{ApiResponse, ResponseStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Complaints (public)
        complaints_handlers::submit_complaint,
    ),
    components(
        schemas(
            // Shared
            ResponseStatus,
            ApiResponse,
            // Complaints
            complaints_dtos::SubmitComplaintDto,
            complaints_dtos::ComplaintResponseDto,
        )
    ),
    tags(
        (name = "complaints", description = "Citizen complaints drafted by an LLM and emailed to the municipal commissioner"),
    ),
    info(
        title = "Civic Complaint Mailer API",
        version = "0.1.0",
        description = "API documentation for the civic complaint mailer",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
