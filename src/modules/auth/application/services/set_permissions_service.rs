use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{
        JobSeekerProfileView, RegistrationError, SetPermissionsCommand, SetPermissionsUseCase,
    },
    outgoing::{PermissionsData, ProfileRepository},
};

#[derive(Debug, Clone)]
pub struct SetPermissionsService<P>
where
    P: ProfileRepository + Send + Sync,
{
    profile_repository: P,
}

impl<P> SetPermissionsService<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn new(profile_repository: P) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<P> SetPermissionsUseCase for SetPermissionsService<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetPermissionsCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        let profile = self
            .profile_repository
            .update_permissions(
                command.user_id,
                PermissionsData {
                    notifications_enabled: command.notifications_enabled,
                    location_enabled: command.location_enabled,
                },
            )
            .await?;

        info!(
            user_id = %command.user_id,
            notifications = command.notifications_enabled,
            location = command.location_enabled,
            "Permissions saved"
        );

        Ok(profile.into())
    }
}
