mod complete_basic_profile;
mod error_response;
mod refresh_token;
mod register_account;
mod send_phone_otp;
mod set_employment_status;
mod set_job_preferences;
mod set_permissions;
mod set_profile_photo;
mod verify_phone_otp;

pub use complete_basic_profile::{
    __path_complete_basic_profile_handler, complete_basic_profile_handler,
    CompleteBasicProfileRequest,
};
pub use refresh_token::{
    __path_refresh_token_handler, refresh_token_handler, RefreshTokenRequestDto,
    RefreshTokenResponseBody,
};
pub use register_account::{
    __path_register_account_handler, register_account_handler, RegisterAccountRequest,
    RegisterAccountResponse,
};
pub use send_phone_otp::{
    __path_send_phone_otp_handler, send_phone_otp_handler, SendPhoneOtpRequest,
};
pub use set_employment_status::{
    __path_set_employment_status_handler, set_employment_status_handler, SetEmploymentStatusRequest,
};
pub use set_job_preferences::{
    __path_set_job_preferences_handler, set_job_preferences_handler, SetJobPreferencesRequest,
};
pub use set_permissions::{
    __path_set_permissions_handler, set_permissions_handler, SetPermissionsRequest,
};
pub use set_profile_photo::{
    __path_set_profile_photo_handler, set_profile_photo_handler, SetProfilePhotoRequest,
};
pub use verify_phone_otp::{
    __path_verify_phone_otp_handler, verify_phone_otp_handler, VerifyPhoneOtpRequest,
};
