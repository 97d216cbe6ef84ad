use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{
        ProfilePhotoView, RegistrationError, SetProfilePhotoCommand, SetProfilePhotoUseCase,
    },
    outgoing::UserRepository,
};

/// Step 8: stores the photo reference and marks the profile complete,
/// whatever state the earlier steps left behind.
#[derive(Debug, Clone)]
pub struct SetProfilePhotoService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> SetProfilePhotoService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetProfilePhotoUseCase for SetProfilePhotoService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetProfilePhotoCommand,
    ) -> Result<ProfilePhotoView, RegistrationError> {
        let user = self
            .repository
            .set_profile_photo(command.user_id(), command.photo_url().to_string())
            .await?;

        info!(user_id = %user.id, "Profile photo saved, registration complete");

        Ok(ProfilePhotoView {
            photo_url: user
                .profile_photo
                .unwrap_or_else(|| command.photo_url().to_string()),
            is_profile_complete: user.is_profile_complete,
        })
    }
}
