use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{User, UserId, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Fields written by the basic profile step. A `None` phone leaves the
/// stored phone untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicProfileData {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub country_code: String,
    pub country: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Phone number already registered")]
    PhoneAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_basic_profile(
        &self,
        user_id: UserId,
        data: BasicProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn mark_phone_verified(
        &self,
        user_id: UserId,
        verified_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError>;

    /// Stores the photo reference and flags the profile as complete.
    async fn set_profile_photo(
        &self,
        user_id: UserId,
        photo_url: String,
    ) -> Result<User, UserRepositoryError>;
}
