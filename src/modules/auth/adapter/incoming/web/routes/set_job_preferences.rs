use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::{JobSearchStatus, JobType};
use crate::auth::application::ports::incoming::use_cases::{
    JobSeekerProfileView, SetJobPreferencesCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetJobPreferencesRequest {
    pub job_search_status: JobSearchStatus,

    #[schema(example = json!(["Backend Engineer"]))]
    #[serde(default)]
    pub desired_positions: Vec<String>,

    #[schema(example = json!(["Jakarta", "Remote"]))]
    #[serde(default)]
    pub preferred_locations: Vec<String>,

    #[serde(default)]
    pub job_types: Vec<JobType>,
}

/// Registration step 6: job preferences
///
/// Replaces the caller's search status, desired positions, preferred
/// locations and job types. Requires the profile created in step 5.
#[utoipa::path(
    post,
    path = "/api/v1/register/preferences",
    tag = "registration",
    request_body = SetJobPreferencesRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Preferences stored",
            body = inline(SuccessResponse<JobSeekerProfileView>),
        ),
        (
            status = 400,
            description = "Profile not created yet",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "profile not found",
                "data": null,
                "code": "PROFILE_NOT_FOUND"
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/v1/register/preferences")]
pub async fn set_job_preferences_handler(
    user: AuthenticatedUser,
    req: web::Json<SetJobPreferencesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = SetJobPreferencesCommand::new(
        user.user_id,
        req.job_search_status,
        req.desired_positions,
        req.preferred_locations,
        req.job_types,
    );

    match data.set_job_preferences_use_case.execute(command).await {
        Ok(profile) => {
            info!(
                user_id = %user.user_id,
                positions = profile.desired_positions.len(),
                job_types = profile.job_types.len(),
                "Job preferences stored"
            );
            ApiResponse::success("Job preferences updated", profile)
        }
        Err(e) => registration_error_response("job_preferences", &e),
    }
}
