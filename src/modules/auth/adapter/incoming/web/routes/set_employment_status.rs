use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::EmploymentStatus;
use crate::auth::application::ports::incoming::use_cases::{
    JobSeekerProfileView, SetEmploymentStatusCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetEmploymentStatusRequest {
    pub employment_status: EmploymentStatus,

    #[schema(example = "Backend Engineer")]
    #[serde(default)]
    pub current_job_title: Option<String>,

    #[schema(example = "Acme Corp")]
    #[serde(default)]
    pub current_company: Option<String>,
}

/// Registration step 5: employment status
///
/// Creates the job-seeker profile on first call and updates it afterwards.
/// Only accounts with the `job_seeker` role may call this step.
#[utoipa::path(
    post,
    path = "/api/v1/register/employment",
    tag = "registration",
    request_body = SetEmploymentStatusRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Employment status stored",
            body = inline(SuccessResponse<JobSeekerProfileView>),
        ),
        (
            status = 400,
            description = "Caller is not a job seeker or user not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "only job seekers can set employment status",
                "data": null,
                "code": "JOB_SEEKER_ONLY"
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/v1/register/employment")]
pub async fn set_employment_status_handler(
    user: AuthenticatedUser,
    req: web::Json<SetEmploymentStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = SetEmploymentStatusCommand::new(
        user.user_id,
        req.employment_status,
        req.current_job_title,
        req.current_company,
    );

    match data.set_employment_status_use_case.execute(command).await {
        Ok(profile) => {
            info!(
                user_id = %user.user_id,
                profile_id = profile.profile_id,
                employment_status = %profile.employment_status,
                "Employment status stored"
            );
            ApiResponse::success("Employment status updated", profile)
        }
        Err(e) => registration_error_response("employment_status", &e),
    }
}
