use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    ProfilePhotoView, RegistrationError, SetProfilePhotoCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetProfilePhotoRequest {
    /// Reference to an already stored image
    #[schema(example = "uploads/profile/42.jpg")]
    pub photo_url: String,
}

/// Registration step 8: profile photo
///
/// Records the photo reference and marks the profile as complete.
#[utoipa::path(
    post,
    path = "/api/v1/register/photo",
    tag = "registration",
    request_body = SetProfilePhotoRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Photo stored, registration complete",
            body = inline(SuccessResponse<ProfilePhotoView>),
            example = json!({
                "success": true,
                "message": "Profile photo updated",
                "data": {
                    "photo_url": "uploads/profile/42.jpg",
                    "is_profile_complete": true
                }
            })
        ),
        (status = 400, description = "Empty photo reference or user not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/v1/register/photo")]
pub async fn set_profile_photo_handler(
    user: AuthenticatedUser,
    req: web::Json<SetProfilePhotoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SetProfilePhotoCommand::new(user.user_id, req.into_inner().photo_url) {
        Ok(cmd) => cmd,
        Err(e) => return registration_error_response("profile_photo", &RegistrationError::from(e)),
    };

    match data.set_profile_photo_use_case.execute(command).await {
        Ok(photo) => {
            info!(user_id = %user.user_id, "Profile photo stored, registration complete");
            ApiResponse::success("Profile photo updated", photo)
        }
        Err(e) => registration_error_response("profile_photo", &e),
    }
}
