use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    CreateAccountCommand, RegistrationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

/// Request body for step 1 of registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterAccountRequest {
    /// Email address, stored lower-cased
    #[schema(example = "jane.doe@example.com")]
    pub email: String,

    /// Password (any non-empty value)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Account role
    pub role: UserRole,
}

// Keeps the plaintext password out of logs.
impl std::fmt::Debug for RegisterAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAccountRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterAccountResponse {
    #[schema(example = 42)]
    pub user_id: i64,

    #[schema(example = "jane.doe@example.com")]
    pub email: String,

    /// Step the client should call next
    #[schema(example = "complete_profile")]
    pub next_step: String,

    pub access_token: String,
    pub refresh_token: String,
}

/// Registration step 1: create an account
///
/// Creates a user with the given role and signs it in straight away.
/// The returned access token authenticates the following steps.
#[utoipa::path(
    post,
    path = "/api/v1/register/step1",
    tag = "registration",
    request_body = RegisterAccountRequest,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterAccountResponse>),
            example = json!({
                "success": true,
                "message": "Registration started",
                "data": {
                    "user_id": 42,
                    "email": "jane.doe@example.com",
                    "next_step": "complete_profile",
                    "access_token": "eyJhbGciOiJIUzI1NiJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiJ9..."
                }
            })
        ),
        (
            status = 400,
            description = "Invalid input or email already registered",
            body = ErrorResponse,
            examples(
                ("Invalid email" = (value = json!({
                    "success": false,
                    "message": "Invalid email format",
                    "data": null,
                    "code": "INVALID_EMAIL"
                }))),
                ("Email taken" = (value = json!({
                    "success": false,
                    "message": "email already registered",
                    "data": null,
                    "code": "EMAIL_ALREADY_REGISTERED"
                })))
            )
        ),
    )
)]
#[post("/api/v1/register/step1")]
pub async fn register_account_handler(
    req: web::Json<RegisterAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    info!(email = %req.email, role = %req.role, "Registration attempt");

    let command = match CreateAccountCommand::new(req.email, req.password, req.role) {
        Ok(cmd) => cmd,
        Err(e) => {
            return registration_error_response("create_account", &RegistrationError::from(e))
        }
    };

    match data.register_user_orchestrator.register_user(command).await {
        Ok(started) => {
            info!(
                user_id = %started.user_id,
                email = %started.email,
                role = %started.role,
                "Account created"
            );

            ApiResponse::created(
                "Registration started",
                RegisterAccountResponse {
                    user_id: started.user_id.value(),
                    email: started.email,
                    next_step: started.next_step.to_string(),
                    access_token: started.access_token,
                    refresh_token: started.refresh_token,
                },
            )
        }
        Err(e) => registration_error_response("create_account", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::stubs::{created_account, StubStep};
    use actix_web::{test, App};
    use serde_json::json;

    async fn call(
        stub: StubStep<crate::auth::application::ports::incoming::use_cases::CreatedAccount>,
        body: serde_json::Value,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_account(stub)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_account_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/register/step1")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_register_account_success() {
        let (status, body) = call(
            StubStep::ok(created_account(42, "jane.doe@example.com")),
            json!({
                "email": "jane.doe@example.com",
                "password": "pw",
                "role": "job_seeker"
            }),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration started");
        assert_eq!(body["data"]["user_id"], 42);
        assert_eq!(body["data"]["email"], "jane.doe@example.com");
        assert_eq!(body["data"]["next_step"], "complete_profile");

        let access = body["data"]["access_token"].as_str().unwrap();
        let claims = create_test_jwt_service().verify_token(access).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, UserRole::JobSeeker);
        assert_eq!(claims.token_type, "access");

        let refresh = body["data"]["refresh_token"].as_str().unwrap();
        let claims = create_test_jwt_service().verify_token(refresh).unwrap();
        assert_eq!(claims.token_type, "refresh");
    }

    #[actix_web::test]
    async fn test_register_account_duplicate_email_is_bad_request() {
        let (status, body) = call(
            StubStep::err(RegistrationError::EmailAlreadyRegistered),
            json!({
                "email": "jane.doe@example.com",
                "password": "pw",
                "role": "job_seeker"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "EMAIL_ALREADY_REGISTERED");
        assert_eq!(body["message"], "email already registered");
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_register_account_invalid_email_never_reaches_use_case() {
        let (status, body) = call(
            StubStep::not_used(),
            json!({
                "email": "not-an-email",
                "password": "pw",
                "role": "employer"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn test_register_account_empty_password() {
        let (status, body) = call(
            StubStep::not_used(),
            json!({
                "email": "a@x.com",
                "password": "",
                "role": "admin"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "INVALID_PASSWORD");
    }

    #[actix_web::test]
    async fn test_register_account_unknown_role_is_validation_error() {
        let (status, body) = call(
            StubStep::not_used(),
            json!({
                "email": "a@x.com",
                "password": "pw",
                "role": "superuser"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_account_internal_error_hides_detail() {
        let (status, body) = call(
            StubStep::err(RegistrationError::Internal("pool timed out".into())),
            json!({
                "email": "a@x.com",
                "password": "pw",
                "role": "job_seeker"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("pool"));
    }
}
