mod complete_basic_profile_service;
mod create_account_service;
mod refresh_token_service;
mod send_phone_otp_service;
mod set_employment_status_service;
mod set_job_preferences_service;
mod set_permissions_service;
mod set_profile_photo_service;
mod verify_phone_otp_service;

#[cfg(test)]
pub mod test_fakes;

pub use complete_basic_profile_service::CompleteBasicProfileService;
pub use create_account_service::CreateAccountService;
pub use refresh_token_service::RefreshTokenService;
pub use send_phone_otp_service::SendPhoneOtpService;
pub use set_employment_status_service::SetEmploymentStatusService;
pub use set_job_preferences_service::SetJobPreferencesService;
pub use set_permissions_service::SetPermissionsService;
pub use set_profile_photo_service::SetProfilePhotoService;
pub use verify_phone_otp_service::VerifyPhoneOtpService;
