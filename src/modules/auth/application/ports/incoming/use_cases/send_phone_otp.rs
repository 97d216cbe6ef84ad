use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{input_rules, RegistrationError, ValidationError};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct SendPhoneOtpCommand {
    user_id: UserId,
    phone_number: String,
}

impl SendPhoneOtpCommand {
    pub fn new(user_id: UserId, phone_number: String) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            phone_number: input_rules::phone_number(&phone_number)?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

/// The issued code is handed back to the caller; SMS delivery happens
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OtpSent {
    #[schema(example = "+6281234567890")]
    pub phone_number: String,
    #[schema(example = "042917")]
    pub otp_code: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64, example = 1735689900)]
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait SendPhoneOtpUseCase: Send + Sync {
    async fn execute(&self, command: SendPhoneOtpCommand) -> Result<OtpSent, RegistrationError>;
}
