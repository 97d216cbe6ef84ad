use std::sync::Arc;

use tracing::error;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::incoming::use_cases::{
    CreateAccountCommand, CreateAccountUseCase, RegistrationError,
};
use crate::auth::application::ports::outgoing::TokenProvider;

/// Marker telling the client which registration step comes next.
pub const NEXT_STEP_COMPLETE_PROFILE: &str = "complete_profile";

// ============================================================================
// Registration Output
// ============================================================================
#[derive(Debug, Clone)]
pub struct RegistrationStarted {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub next_step: &'static str,
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_account_use_case: Arc<dyn CreateAccountUseCase + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_account_use_case: Arc<dyn CreateAccountUseCase + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            create_account_use_case,
            token_provider,
        }
    }

    /// Creates the account, then signs it in with a fresh token pair.
    pub async fn register_user(
        &self,
        command: CreateAccountCommand,
    ) -> Result<RegistrationStarted, RegistrationError> {
        let account = self.create_account_use_case.execute(command).await?;

        let tokens = self
            .token_provider
            .issue_token_pair(account.user_id, account.role)
            .map_err(|e| {
                error!(user_id = %account.user_id, error = %e, "Token issuance failed");
                RegistrationError::from(e)
            })?;

        Ok(RegistrationStarted {
            user_id: account.user_id,
            email: account.email,
            role: account.role,
            next_step: NEXT_STEP_COMPLETE_PROFILE,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }
}
