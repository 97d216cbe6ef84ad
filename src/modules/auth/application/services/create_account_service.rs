use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{
        CreateAccountCommand, CreateAccountUseCase, CreatedAccount, RegistrationError,
    },
    outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository},
};

/// Step 1: creates the credential record. Token issuance is layered on top
/// by the registration orchestrator.
#[derive(Clone)]
pub struct CreateAccountService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateAccountService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> CreateAccountUseCase for CreateAccountService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateAccountCommand,
    ) -> Result<CreatedAccount, RegistrationError> {
        if self.query.find_by_email(command.email()).await?.is_some() {
            warn!(email = %command.email(), "Email already registered");
            return Err(RegistrationError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await?;

        // The partial unique index still guards against a concurrent insert.
        let user = self
            .repository
            .create_user(CreateUserData {
                email: command.email().to_string(),
                password_hash,
                role: command.role(),
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account created");

        Ok(CreatedAccount {
            user_id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}
