use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh an access token
///
/// Exchanges a valid refresh token for a new access and refresh token pair
/// bound to the same user and role.
#[utoipa::path(
    post,
    path = "/api/v1/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New token pair issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>),
        ),
        (
            status = 400,
            description = "Empty token, wrong token type or token not yet valid",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Invalid token type. Please use a refresh token.",
                "data": null,
                "code": "INVALID_TOKEN_TYPE"
            })
        ),
        (
            status = 401,
            description = "Expired or invalid refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "message": "Refresh token has expired. Please register or sign in again.",
                "data": null,
                "code": "TOKEN_EXPIRED"
            })
        ),
        (status = 500, description = "Token generation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!("Token refresh attempt");

    match data.refresh_token_use_case.execute(request).await {
        Ok(pair) => {
            info!("Token refreshed successfully");

            ApiResponse::success(
                "Token refreshed",
                RefreshTokenResponseBody {
                    access_token: pair.access_token,
                    refresh_token: pair.refresh_token,
                },
            )
        }

        Err(RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: token expired");
            ApiResponse::unauthorized(
                "TOKEN_EXPIRED",
                "Refresh token has expired. Please register or sign in again.",
            )
        }

        Err(RefreshTokenError::TokenInvalid) => {
            warn!("Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::InvalidTokenType) => {
            warn!("Token refresh failed: wrong token type");
            ApiResponse::bad_request(
                "INVALID_TOKEN_TYPE",
                "Invalid token type. Please use a refresh token.",
            )
        }

        Err(RefreshTokenError::TokenNotYetValid) => {
            warn!("Token refresh failed: token not yet valid");
            ApiResponse::bad_request("TOKEN_NOT_YET_VALID", "Token is not yet valid")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred",
            )
        }
    }
}
