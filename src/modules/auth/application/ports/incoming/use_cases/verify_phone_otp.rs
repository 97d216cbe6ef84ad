use async_trait::async_trait;

use super::{input_rules, BasicProfileView, RegistrationError, ValidationError};

/// Verification carries no caller identity; the phone number selects the user.
#[derive(Debug, Clone)]
pub struct VerifyPhoneOtpCommand {
    phone_number: String,
    otp_code: String,
}

impl VerifyPhoneOtpCommand {
    pub fn new(phone_number: String, otp_code: String) -> Result<Self, ValidationError> {
        Ok(Self {
            phone_number: input_rules::phone_number(&phone_number)?,
            otp_code: input_rules::otp_code(&otp_code)?,
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn otp_code(&self) -> &str {
        &self.otp_code
    }
}

#[async_trait]
pub trait VerifyPhoneOtpUseCase: Send + Sync {
    async fn execute(
        &self,
        command: VerifyPhoneOtpCommand,
    ) -> Result<BasicProfileView, RegistrationError>;
}
