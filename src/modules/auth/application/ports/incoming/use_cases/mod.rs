mod complete_basic_profile;
mod create_account;
pub(crate) mod input_rules;
mod refresh_token;
mod registration_error;
mod send_phone_otp;
mod set_employment_status;
mod set_job_preferences;
mod set_permissions;
mod set_profile_photo;
mod verify_phone_otp;
mod views;

pub use complete_basic_profile::{CompleteBasicProfileCommand, CompleteBasicProfileUseCase};
pub use create_account::{CreateAccountCommand, CreateAccountUseCase, CreatedAccount};
pub use refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenRequestError, RefreshTokenUseCase,
};
pub use registration_error::{ErrorKind, RegistrationError, ValidationError};
pub use send_phone_otp::{OtpSent, SendPhoneOtpCommand, SendPhoneOtpUseCase};
pub use set_employment_status::{SetEmploymentStatusCommand, SetEmploymentStatusUseCase};
pub use set_job_preferences::{SetJobPreferencesCommand, SetJobPreferencesUseCase};
pub use set_permissions::{SetPermissionsCommand, SetPermissionsUseCase};
pub use set_profile_photo::{ProfilePhotoView, SetProfilePhotoCommand, SetProfilePhotoUseCase};
pub use verify_phone_otp::{VerifyPhoneOtpCommand, VerifyPhoneOtpUseCase};
pub use views::{BasicProfileView, JobSeekerProfileView};
