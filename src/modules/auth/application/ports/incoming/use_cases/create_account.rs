use async_trait::async_trait;
use email_address::EmailAddress;

use super::{RegistrationError, ValidationError};
use crate::auth::application::domain::entities::{UserId, UserRole};

//
// ──────────────────────────────────────────────────────────
// Create Account Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct CreateAccountCommand {
    email: String,
    password: String,
    role: UserRole,
}

impl CreateAccountCommand {
    pub fn new(email: String, password: String, role: UserRole) -> Result<Self, ValidationError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        if password.trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password,
            role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

// Keeps the plaintext password out of logs.
impl std::fmt::Debug for CreateAccountCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAccount {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateAccountCommand,
    ) -> Result<CreatedAccount, RegistrationError>;
}
