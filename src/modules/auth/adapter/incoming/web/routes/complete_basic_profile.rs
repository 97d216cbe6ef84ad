use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    BasicProfileView, CompleteBasicProfileCommand, RegistrationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

/// Request body for step 2 of registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompleteBasicProfileRequest {
    #[schema(example = "Jane")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    /// Optional; an empty string counts as absent
    #[schema(example = "+6281234567890")]
    #[serde(default)]
    pub phone_number: Option<String>,

    #[schema(example = "+62")]
    #[serde(default)]
    pub country_code: String,

    #[schema(example = "Indonesia")]
    #[serde(default)]
    pub country: String,
}

/// Registration step 2: basic profile
///
/// Stores name, phone and country on the caller's account.
#[utoipa::path(
    put,
    path = "/api/v1/register/profile",
    tag = "registration",
    request_body = CompleteBasicProfileRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Profile stored",
            body = inline(SuccessResponse<BasicProfileView>),
            example = json!({
                "success": true,
                "message": "Profile updated",
                "data": {
                    "user_id": 42,
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "phone_number": "+6281234567890",
                    "country_code": "+62",
                    "country": "Indonesia",
                    "is_phone_verified": false
                }
            })
        ),
        (
            status = 400,
            description = "Invalid input, phone already registered or user not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "phone number already registered",
                "data": null,
                "code": "PHONE_ALREADY_REGISTERED"
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[put("/api/v1/register/profile")]
pub async fn complete_basic_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<CompleteBasicProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CompleteBasicProfileCommand::new(
        user.user_id,
        req.first_name,
        req.last_name,
        req.phone_number,
        req.country_code,
        req.country,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            return registration_error_response("complete_profile", &RegistrationError::from(e))
        }
    };

    match data.complete_basic_profile_use_case.execute(command).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Basic profile completed");
            ApiResponse::success("Profile updated", profile)
        }
        Err(e) => registration_error_response("complete_profile", &e),
    }
}
