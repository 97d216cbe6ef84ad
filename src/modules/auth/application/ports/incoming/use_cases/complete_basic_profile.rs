use async_trait::async_trait;

use super::{input_rules, BasicProfileView, RegistrationError, ValidationError};
use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Complete Basic Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CompleteBasicProfileCommand {
    user_id: UserId,
    first_name: String,
    last_name: String,
    phone_number: Option<String>,
    country_code: String,
    country: String,
}

impl CompleteBasicProfileCommand {
    pub fn new(
        user_id: UserId,
        first_name: String,
        last_name: String,
        phone_number: Option<String>,
        country_code: String,
        country: String,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }

        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(ValidationError::EmptyLastName);
        }

        Ok(Self {
            user_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: input_rules::optional_phone_number(phone_number)?,
            country_code: country_code.trim().to_string(),
            country: country.trim().to_string(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[async_trait]
pub trait CompleteBasicProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CompleteBasicProfileCommand,
    ) -> Result<BasicProfileView, RegistrationError>;
}
