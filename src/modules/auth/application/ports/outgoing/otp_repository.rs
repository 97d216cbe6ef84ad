use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{OtpVerification, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOtpData {
    pub user_id: Option<UserId>,
    pub phone_number: String,
    pub otp_code: String,
    pub purpose: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OtpRepositoryError {
    #[error("OTP has already been used")]
    AlreadyUsed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OtpRepository: Send + Sync {
    async fn create_otp(&self, data: CreateOtpData) -> Result<OtpVerification, OtpRepositoryError>;

    /// Most relevant row for (phone, purpose, code): unused rows win over
    /// used ones, then the newest row wins.
    async fn find_latest(
        &self,
        phone_number: &str,
        purpose: &str,
        otp_code: &str,
    ) -> Result<Option<OtpVerification>, OtpRepositoryError>;

    /// Flips `is_used` from false to true. Fails with `AlreadyUsed` when the
    /// row was consumed in the meantime.
    async fn mark_used(&self, otp_id: i64) -> Result<(), OtpRepositoryError>;
}
