use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    BasicProfileView, RegistrationError, VerifyPhoneOtpCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPhoneOtpRequest {
    #[schema(example = "+6281234567890")]
    pub phone_number: String,

    #[schema(example = "042917")]
    pub otp_code: String,
}

/// Registration step 4: verify a phone OTP
///
/// Consumes a previously issued code and marks the owning user's phone as
/// verified. No bearer token is needed; the phone and code identify the user.
#[utoipa::path(
    post,
    path = "/api/v1/register/verify-otp",
    tag = "registration",
    request_body = VerifyPhoneOtpRequest,
    responses(
        (
            status = 200,
            description = "Phone verified",
            body = inline(SuccessResponse<BasicProfileView>),
        ),
        (
            status = 400,
            description = "Unknown, expired or already used code",
            body = ErrorResponse,
            examples(
                ("Unknown code" = (value = json!({
                    "success": false,
                    "message": "invalid or expired OTP",
                    "data": null,
                    "code": "OTP_INVALID_OR_EXPIRED"
                }))),
                ("Expired" = (value = json!({
                    "success": false,
                    "message": "OTP has expired",
                    "data": null,
                    "code": "OTP_EXPIRED"
                }))),
                ("Already used" = (value = json!({
                    "success": false,
                    "message": "OTP has already been used",
                    "data": null,
                    "code": "OTP_ALREADY_USED"
                })))
            )
        ),
    )
)]
#[post("/api/v1/register/verify-otp")]
pub async fn verify_phone_otp_handler(
    req: web::Json<VerifyPhoneOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match VerifyPhoneOtpCommand::new(req.phone_number, req.otp_code) {
        Ok(cmd) => cmd,
        Err(e) => return registration_error_response("verify_otp", &RegistrationError::from(e)),
    };

    match data.verify_phone_otp_use_case.execute(command).await {
        Ok(profile) => {
            info!(user_id = %profile.user_id, "Phone number verified");
            ApiResponse::success("Phone number verified", profile)
        }
        Err(e) => registration_error_response("verify_otp", &e),
    }
}
