use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::auth::application::domain::{
    entities::PHONE_VERIFICATION_PURPOSE, otp_policy::OtpPolicy,
};
use crate::auth::application::ports::{
    incoming::use_cases::{OtpSent, RegistrationError, SendPhoneOtpCommand, SendPhoneOtpUseCase},
    outgoing::{CreateOtpData, OtpCodeGenerator, OtpRepository, UserQuery},
};

/// Step 3: issues a fresh phone verification code for an existing user.
#[derive(Clone)]
pub struct SendPhoneOtpService<Q, O>
where
    Q: UserQuery + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    query: Q,
    otp_repository: O,
    code_generator: Arc<dyn OtpCodeGenerator>,
    policy: OtpPolicy,
}

impl<Q, O> SendPhoneOtpService<Q, O>
where
    Q: UserQuery + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        otp_repository: O,
        code_generator: Arc<dyn OtpCodeGenerator>,
        policy: OtpPolicy,
    ) -> Self {
        Self {
            query,
            otp_repository,
            code_generator,
            policy,
        }
    }
}

#[async_trait]
impl<Q, O> SendPhoneOtpUseCase for SendPhoneOtpService<Q, O>
where
    Q: UserQuery + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    async fn execute(&self, command: SendPhoneOtpCommand) -> Result<OtpSent, RegistrationError> {
        let user_id = command.user_id();

        if self.query.find_by_id(user_id).await?.is_none() {
            return Err(RegistrationError::UserNotFound);
        }

        let now = Utc::now();
        let otp = self
            .otp_repository
            .create_otp(CreateOtpData {
                user_id: Some(user_id),
                phone_number: command.phone_number().to_string(),
                otp_code: self.code_generator.generate(),
                purpose: PHONE_VERIFICATION_PURPOSE.to_string(),
                created_at: now,
                expires_at: now + self.policy.ttl,
            })
            .await?;

        info!(%user_id, phone = %otp.phone_number, otp_id = otp.id, "OTP issued");
        debug!(otp_code = %otp.otp_code, "Issued OTP code");

        Ok(OtpSent {
            phone_number: otp.phone_number,
            otp_code: otp.otp_code,
            expires_at: otp.expires_at,
        })
    }
}
