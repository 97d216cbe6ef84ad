use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    BasicProfileView, CompleteBasicProfileUseCase, CreateAccountUseCase, CreatedAccount,
    JobSeekerProfileView, OtpSent, ProfilePhotoView, RefreshTokenUseCase, SendPhoneOtpUseCase,
    SetEmploymentStatusUseCase, SetJobPreferencesUseCase, SetPermissionsUseCase,
    SetProfilePhotoUseCase, VerifyPhoneOtpUseCase,
};
use crate::tests::support::auth_helper::test_helpers::test_token_provider;
use crate::tests::support::stubs::{StubRefreshTokenUseCase, StubStep};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    complete_basic_profile: Arc<dyn CompleteBasicProfileUseCase + Send + Sync>,
    send_phone_otp: Arc<dyn SendPhoneOtpUseCase + Send + Sync>,
    verify_phone_otp: Arc<dyn VerifyPhoneOtpUseCase + Send + Sync>,
    set_employment_status: Arc<dyn SetEmploymentStatusUseCase + Send + Sync>,
    set_job_preferences: Arc<dyn SetJobPreferencesUseCase + Send + Sync>,
    set_permissions: Arc<dyn SetPermissionsUseCase + Send + Sync>,
    set_profile_photo: Arc<dyn SetProfilePhotoUseCase + Send + Sync>,
    refresh_token: Arc<dyn RefreshTokenUseCase + Send + Sync>,
}

pub fn test_user_registration_orchestrator(
    create_account: impl CreateAccountUseCase + Send + Sync + 'static,
) -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(create_account),
        test_token_provider(),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: test_user_registration_orchestrator(
                StubStep::<CreatedAccount>::not_used(),
            ),
            complete_basic_profile: Arc::new(StubStep::<BasicProfileView>::not_used()),
            send_phone_otp: Arc::new(StubStep::<OtpSent>::not_used()),
            verify_phone_otp: Arc::new(StubStep::<BasicProfileView>::not_used()),
            set_employment_status: Arc::new(StubStep::<JobSeekerProfileView>::not_used()),
            set_job_preferences: Arc::new(StubStep::<JobSeekerProfileView>::not_used()),
            set_permissions: Arc::new(StubStep::<JobSeekerProfileView>::not_used()),
            set_profile_photo: Arc::new(StubStep::<ProfilePhotoView>::not_used()),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_account(
        mut self,
        uc: impl CreateAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = test_user_registration_orchestrator(uc);
        self
    }

    pub fn with_complete_basic_profile(
        mut self,
        uc: impl CompleteBasicProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.complete_basic_profile = Arc::new(uc);
        self
    }

    pub fn with_send_phone_otp(
        mut self,
        uc: impl SendPhoneOtpUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_phone_otp = Arc::new(uc);
        self
    }

    pub fn with_verify_phone_otp(
        mut self,
        uc: impl VerifyPhoneOtpUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_phone_otp = Arc::new(uc);
        self
    }

    pub fn with_set_employment_status(
        mut self,
        uc: impl SetEmploymentStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_employment_status = Arc::new(uc);
        self
    }

    pub fn with_set_job_preferences(
        mut self,
        uc: impl SetJobPreferencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_job_preferences = Arc::new(uc);
        self
    }

    pub fn with_set_permissions(
        mut self,
        uc: impl SetPermissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_permissions = Arc::new(uc);
        self
    }

    pub fn with_set_profile_photo(
        mut self,
        uc: impl SetProfilePhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_profile_photo = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            complete_basic_profile_use_case: self.complete_basic_profile,
            send_phone_otp_use_case: self.send_phone_otp,
            verify_phone_otp_use_case: self.verify_phone_otp,
            set_employment_status_use_case: self.set_employment_status,
            set_job_preferences_use_case: self.set_job_preferences,
            set_permissions_use_case: self.set_permissions,
            set_profile_photo_use_case: self.set_profile_photo,
            refresh_token_use_case: self.refresh_token,
        })
    }
}
