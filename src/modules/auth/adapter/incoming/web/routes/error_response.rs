use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::auth::application::ports::incoming::use_cases::{ErrorKind, RegistrationError};
use crate::shared::api::ApiResponse;

/// Every workflow failure becomes a 400 envelope carrying the error code.
/// Internal details stay in the logs.
pub(super) fn registration_error_response(
    step: &'static str,
    err: &RegistrationError,
) -> HttpResponse {
    if err.kind() == ErrorKind::Internal {
        error!(step, error = %err, "Registration step failed");
        return ApiResponse::bad_request(err.code(), "An unexpected error occurred");
    }

    warn!(step, code = err.code(), error = %err, "Registration step rejected");
    ApiResponse::bad_request(err.code(), &err.to_string())
}
