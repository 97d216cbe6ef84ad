use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::{RegistrationError, ValidationError};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct SetProfilePhotoCommand {
    user_id: UserId,
    photo_url: String,
}

impl SetProfilePhotoCommand {
    pub fn new(user_id: UserId, photo_url: String) -> Result<Self, ValidationError> {
        let photo_url = photo_url.trim();
        if photo_url.is_empty() {
            return Err(ValidationError::EmptyPhotoUrl);
        }

        Ok(Self {
            user_id,
            photo_url: photo_url.to_string(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfilePhotoView {
    #[schema(example = "uploads/profile/42.jpg")]
    pub photo_url: String,
    pub is_profile_complete: bool,
}

#[async_trait]
pub trait SetProfilePhotoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SetProfilePhotoCommand,
    ) -> Result<ProfilePhotoView, RegistrationError>;
}
