use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    OtpSent, RegistrationError, SendPhoneOtpCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_response::registration_error_response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendPhoneOtpRequest {
    #[schema(example = "+6281234567890")]
    pub phone_number: String,
}

/// Registration step 3: issue a phone OTP
///
/// Issues a fresh six digit code for the phone number. The code is returned
/// in the response; SMS delivery is handled outside this service.
#[utoipa::path(
    post,
    path = "/api/v1/register/send-otp",
    tag = "registration",
    request_body = SendPhoneOtpRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "OTP issued",
            body = inline(SuccessResponse<OtpSent>),
            example = json!({
                "success": true,
                "message": "OTP sent",
                "data": {
                    "phone_number": "+6281234567890",
                    "otp_code": "042917",
                    "expires_at": 1735689900
                }
            })
        ),
        (
            status = 400,
            description = "Invalid phone number",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Invalid phone number",
                "data": null,
                "code": "INVALID_PHONE_NUMBER"
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/v1/register/send-otp")]
pub async fn send_phone_otp_handler(
    user: AuthenticatedUser,
    req: web::Json<SendPhoneOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SendPhoneOtpCommand::new(user.user_id, req.into_inner().phone_number) {
        Ok(cmd) => cmd,
        Err(e) => return registration_error_response("send_otp", &RegistrationError::from(e)),
    };

    match data.send_phone_otp_use_case.execute(command).await {
        Ok(sent) => {
            info!(
                user_id = %user.user_id,
                expires_at = %sent.expires_at,
                "Phone OTP issued"
            );
            ApiResponse::success("OTP sent", sent)
        }
        Err(e) => registration_error_response("send_otp", &e),
    }
}
