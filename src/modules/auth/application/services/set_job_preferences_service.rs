use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{
        JobSeekerProfileView, RegistrationError, SetJobPreferencesCommand, SetJobPreferencesUseCase,
    },
    outgoing::{JobPreferencesData, ProfileRepository},
};

/// Step 6: overwrites job-search fields on an existing profile.
#[derive(Debug, Clone)]
pub struct SetJobPreferencesService<P>
where
    P: ProfileRepository + Send + Sync,
{
    profile_repository: P,
}

impl<P> SetJobPreferencesService<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn new(profile_repository: P) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<P> SetJobPreferencesUseCase for SetJobPreferencesService<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetJobPreferencesCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        let user_id = command.user_id();

        let profile = self
            .profile_repository
            .update_preferences(
                user_id,
                JobPreferencesData {
                    job_search_status: command.job_search_status(),
                    desired_positions: command.desired_positions().to_vec(),
                    preferred_locations: command.preferred_locations().to_vec(),
                    job_types: command.job_types().to_vec(),
                },
            )
            .await?;

        info!(%user_id, profile_id = profile.id, "Job preferences saved");

        Ok(profile.into())
    }
}
