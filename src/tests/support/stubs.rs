use async_trait::async_trait;

use crate::auth::application::domain::entities::{EmploymentStatus, UserId, UserRole};
use crate::auth::application::ports::incoming::use_cases::{
    BasicProfileView, CompleteBasicProfileCommand, CompleteBasicProfileUseCase,
    CreateAccountCommand, CreateAccountUseCase, CreatedAccount, JobSeekerProfileView, OtpSent,
    ProfilePhotoView, RefreshTokenError, RefreshTokenRequest, RefreshTokenUseCase,
    RegistrationError, SendPhoneOtpCommand, SendPhoneOtpUseCase, SetEmploymentStatusCommand,
    SetEmploymentStatusUseCase, SetJobPreferencesCommand, SetJobPreferencesUseCase,
    SetPermissionsCommand, SetPermissionsUseCase, SetProfilePhotoCommand, SetProfilePhotoUseCase,
    VerifyPhoneOtpCommand, VerifyPhoneOtpUseCase,
};
use crate::auth::application::ports::outgoing::TokenPair;

/// Canned outcome for any registration step.
#[derive(Clone)]
pub struct StubStep<T> {
    outcome: Result<T, RegistrationError>,
}

impl<T: Clone> StubStep<T> {
    pub fn ok(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    pub fn err(error: RegistrationError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    pub fn not_used() -> Self {
        Self::err(RegistrationError::Internal(
            "Not used in this test".to_string(),
        ))
    }

    fn outcome(&self) -> Result<T, RegistrationError> {
        self.outcome.clone()
    }
}

#[async_trait]
impl CreateAccountUseCase for StubStep<CreatedAccount> {
    async fn execute(&self, _: CreateAccountCommand) -> Result<CreatedAccount, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl CompleteBasicProfileUseCase for StubStep<BasicProfileView> {
    async fn execute(
        &self,
        _: CompleteBasicProfileCommand,
    ) -> Result<BasicProfileView, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl VerifyPhoneOtpUseCase for StubStep<BasicProfileView> {
    async fn execute(
        &self,
        _: VerifyPhoneOtpCommand,
    ) -> Result<BasicProfileView, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl SendPhoneOtpUseCase for StubStep<OtpSent> {
    async fn execute(&self, _: SendPhoneOtpCommand) -> Result<OtpSent, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl SetEmploymentStatusUseCase for StubStep<JobSeekerProfileView> {
    async fn execute(
        &self,
        _: SetEmploymentStatusCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl SetJobPreferencesUseCase for StubStep<JobSeekerProfileView> {
    async fn execute(
        &self,
        _: SetJobPreferencesCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl SetPermissionsUseCase for StubStep<JobSeekerProfileView> {
    async fn execute(
        &self,
        _: SetPermissionsCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        self.outcome()
    }
}

#[async_trait]
impl SetProfilePhotoUseCase for StubStep<ProfilePhotoView> {
    async fn execute(
        &self,
        _: SetProfilePhotoCommand,
    ) -> Result<ProfilePhotoView, RegistrationError> {
        self.outcome()
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _: RefreshTokenRequest) -> Result<TokenPair, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

// ========================================================================
// Fixtures
// ========================================================================

pub fn created_account(user_id: i64, email: &str) -> CreatedAccount {
    CreatedAccount {
        user_id: UserId::from(user_id),
        email: email.to_string(),
        role: UserRole::JobSeeker,
    }
}

pub fn basic_profile(user_id: i64) -> BasicProfileView {
    BasicProfileView {
        user_id: UserId::from(user_id),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: Some("+6281234567890".to_string()),
        country_code: "+62".to_string(),
        country: "Indonesia".to_string(),
        is_phone_verified: false,
    }
}

pub fn job_seeker_profile(user_id: i64) -> JobSeekerProfileView {
    JobSeekerProfileView {
        profile_id: 100,
        user_id: UserId::from(user_id),
        employment_status: EmploymentStatus::Unemployed,
        current_job_title: None,
        current_company: None,
        job_search_status: None,
        desired_positions: vec![],
        preferred_locations: vec![],
        job_types: vec![],
        notifications_enabled: false,
        location_enabled: false,
    }
}
