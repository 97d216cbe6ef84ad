use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CompleteBasicProfileRequest, RefreshTokenRequestDto, RefreshTokenResponseBody,
    RegisterAccountRequest, RegisterAccountResponse, SendPhoneOtpRequest,
    SetEmploymentStatusRequest, SetJobPreferencesRequest, SetPermissionsRequest,
    SetProfilePhotoRequest, VerifyPhoneOtpRequest,
};
use crate::auth::application::domain::entities::{
    EmploymentStatus, JobSearchStatus, JobType, UserRole,
};
use crate::auth::application::ports::incoming::use_cases::{
    BasicProfileView, JobSeekerProfileView, OtpSent, ProfilePhotoView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Fair Registration API",
        version = "1.0.0",
        description = "Multi-step account registration and phone verification for the job fair platform",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Registration steps
        crate::auth::adapter::incoming::web::routes::register_account_handler,
        crate::auth::adapter::incoming::web::routes::complete_basic_profile_handler,
        crate::auth::adapter::incoming::web::routes::send_phone_otp_handler,
        crate::auth::adapter::incoming::web::routes::verify_phone_otp_handler,
        crate::auth::adapter::incoming::web::routes::set_employment_status_handler,
        crate::auth::adapter::incoming::web::routes::set_job_preferences_handler,
        crate::auth::adapter::incoming::web::routes::set_permissions_handler,
        crate::auth::adapter::incoming::web::routes::set_profile_photo_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,

            // Enumerations
            UserRole,
            EmploymentStatus,
            JobSearchStatus,
            JobType,

            // Registration DTOs
            RegisterAccountRequest,
            RegisterAccountResponse,
            CompleteBasicProfileRequest,
            SendPhoneOtpRequest,
            VerifyPhoneOtpRequest,
            SetEmploymentStatusRequest,
            SetJobPreferencesRequest,
            SetPermissionsRequest,
            SetProfilePhotoRequest,
            BasicProfileView,
            JobSeekerProfileView,
            OtpSent,
            ProfilePhotoView,

            // Auth DTOs
            RefreshTokenRequestDto,
            RefreshTokenResponseBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "registration", description = "Step-by-step registration endpoints"),
        (name = "auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by registration step 1"))
                        .build(),
                ),
            )
        }
    }
}
