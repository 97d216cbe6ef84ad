use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    JobSeekerProfileView, SetPermissionsCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetPermissionsRequest {
    #[schema(example = true)]
    pub notifications_enabled: bool,

    #[schema(example = false)]
    pub location_enabled: bool,
}

/// Registration step 7: device permissions
#[utoipa::path(
    post,
    path = "/api/v1/register/permissions",
    tag = "registration",
    request_body = SetPermissionsRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Permissions stored",
            body = inline(SuccessResponse<JobSeekerProfileView>),
        ),
        (status = 400, description = "Profile not created yet", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/v1/register/permissions")]
pub async fn set_permissions_handler(
    user: AuthenticatedUser,
    req: web::Json<SetPermissionsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = SetPermissionsCommand {
        user_id: user.user_id,
        notifications_enabled: req.notifications_enabled,
        location_enabled: req.location_enabled,
    };

    match data.set_permissions_use_case.execute(command).await {
        Ok(profile) => {
            info!(
                user_id = %user.user_id,
                notifications = profile.notifications_enabled,
                location = profile.location_enabled,
                "Permissions stored"
            );
            ApiResponse::success("Permissions updated", profile)
        }
        Err(e) => registration_error_response("permissions", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::incoming::use_cases::RegistrationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{bearer_for, test_token_provider};
    use crate::tests::support::stubs::{job_seeker_profile, StubStep};
    use actix_web::{test, App};
    use serde_json::json;

    async fn call(
        stub: StubStep<JobSeekerProfileView>,
        body: serde_json::Value,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_set_permissions(stub)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_json_config())
                .service(set_permissions_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/register/permissions")
            .insert_header(("Authorization", bearer_for(42, UserRole::JobSeeker)))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_set_permissions_success() {
        let mut profile = job_seeker_profile(42);
        profile.notifications_enabled = true;

        let (status, body) = call(
            StubStep::ok(profile),
            json!({ "notifications_enabled": true, "location_enabled": false }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["notifications_enabled"], true);
        assert_eq!(body["data"]["location_enabled"], false);
    }

    #[actix_web::test]
    async fn test_set_permissions_without_profile() {
        let (status, body) = call(
            StubStep::err(RegistrationError::ProfileNotFound),
            json!({ "notifications_enabled": true, "location_enabled": true }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "PROFILE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_set_permissions_requires_both_flags() {
        let (status, body) = call(
            StubStep::not_used(),
            json!({ "notifications_enabled": true }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
