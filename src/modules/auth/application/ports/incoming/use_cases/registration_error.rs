use crate::auth::application::ports::outgoing::{
    HashError, OtpRepositoryError, ProfileRepositoryError, TokenError, UserQueryError,
    UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Input validation errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Invalid phone number")]
    InvalidPhoneNumber,

    #[error("OTP code must be 6 digits")]
    InvalidOtpCode,

    #[error("Photo URL cannot be empty")]
    EmptyPhotoUrl,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyEmail | ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::EmptyPassword => "INVALID_PASSWORD",
            ValidationError::EmptyFirstName | ValidationError::EmptyLastName => "INVALID_NAME",
            ValidationError::InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
            ValidationError::InvalidOtpCode => "INVALID_OTP_FORMAT",
            ValidationError::EmptyPhotoUrl => "INVALID_PHOTO_URL",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Workflow errors
// ──────────────────────────────────────────────────────────
//

/// Coarse classification every workflow failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Forbidden,
    InvalidOrExpired,
    Expired,
    AlreadyUsed,
    Internal,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("phone number already registered")]
    PhoneAlreadyRegistered,

    #[error("profile already exists")]
    ProfileAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("profile not found")]
    ProfileNotFound,

    #[error("only job seekers can set employment status")]
    NotJobSeeker,

    #[error("invalid or expired OTP")]
    OtpInvalidOrExpired,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("OTP has already been used")]
    OtpAlreadyUsed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::Validation(_) => ErrorKind::Validation,
            RegistrationError::EmailAlreadyRegistered
            | RegistrationError::PhoneAlreadyRegistered
            | RegistrationError::ProfileAlreadyExists => ErrorKind::Conflict,
            RegistrationError::UserNotFound | RegistrationError::ProfileNotFound => {
                ErrorKind::NotFound
            }
            RegistrationError::NotJobSeeker => ErrorKind::Forbidden,
            RegistrationError::OtpInvalidOrExpired => ErrorKind::InvalidOrExpired,
            RegistrationError::OtpExpired => ErrorKind::Expired,
            RegistrationError::OtpAlreadyUsed => ErrorKind::AlreadyUsed,
            RegistrationError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Machine-readable code surfaced in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::Validation(e) => e.code(),
            RegistrationError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            RegistrationError::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",
            RegistrationError::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",
            RegistrationError::UserNotFound => "USER_NOT_FOUND",
            RegistrationError::ProfileNotFound => "PROFILE_NOT_FOUND",
            RegistrationError::NotJobSeeker => "JOB_SEEKER_ONLY",
            RegistrationError::OtpInvalidOrExpired => "OTP_INVALID_OR_EXPIRED",
            RegistrationError::OtpExpired => "OTP_EXPIRED",
            RegistrationError::OtpAlreadyUsed => "OTP_ALREADY_USED",
            RegistrationError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outgoing port error translation
// ──────────────────────────────────────────────────────────
//

impl From<UserQueryError> for RegistrationError {
    fn from(e: UserQueryError) -> Self {
        RegistrationError::Internal(e.to_string())
    }
}

impl From<UserRepositoryError> for RegistrationError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::EmailAlreadyExists => RegistrationError::EmailAlreadyRegistered,
            UserRepositoryError::PhoneAlreadyExists => RegistrationError::PhoneAlreadyRegistered,
            UserRepositoryError::UserNotFound => RegistrationError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => RegistrationError::Internal(msg),
        }
    }
}

impl From<ProfileRepositoryError> for RegistrationError {
    fn from(e: ProfileRepositoryError) -> Self {
        match e {
            ProfileRepositoryError::ProfileNotFound => RegistrationError::ProfileNotFound,
            ProfileRepositoryError::ProfileAlreadyExists => RegistrationError::ProfileAlreadyExists,
            ProfileRepositoryError::DatabaseError(msg) => RegistrationError::Internal(msg),
        }
    }
}

impl From<OtpRepositoryError> for RegistrationError {
    fn from(e: OtpRepositoryError) -> Self {
        match e {
            OtpRepositoryError::AlreadyUsed => RegistrationError::OtpAlreadyUsed,
            OtpRepositoryError::DatabaseError(msg) => RegistrationError::Internal(msg),
        }
    }
}

impl From<HashError> for RegistrationError {
    fn from(e: HashError) -> Self {
        RegistrationError::Internal(e.to_string())
    }
}

impl From<TokenError> for RegistrationError {
    fn from(e: TokenError) -> Self {
        RegistrationError::Internal(e.to_string())
    }
}
