use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::{
    incoming::use_cases::{
        JobSeekerProfileView, RegistrationError, SetEmploymentStatusCommand,
        SetEmploymentStatusUseCase,
    },
    outgoing::{EmploymentData, ProfileRepository, UserQuery},
};

/// Step 5: creates the job-seeker profile on first call, updates it after.
#[derive(Debug, Clone)]
pub struct SetEmploymentStatusService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    query: Q,
    profile_repository: P,
}

impl<Q, P> SetEmploymentStatusService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn new(query: Q, profile_repository: P) -> Self {
        Self {
            query,
            profile_repository,
        }
    }
}

#[async_trait]
impl<Q, P> SetEmploymentStatusUseCase for SetEmploymentStatusService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetEmploymentStatusCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError> {
        let user_id = command.user_id();

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(RegistrationError::UserNotFound)?;

        if user.role != UserRole::JobSeeker {
            warn!(%user_id, role = %user.role, "Employment status rejected for non job seeker");
            return Err(RegistrationError::NotJobSeeker);
        }

        let data = EmploymentData {
            employment_status: command.employment_status(),
            current_job_title: command.current_job_title().map(str::to_string),
            current_company: command.current_company().map(str::to_string),
        };

        let profile = match self.profile_repository.find_by_user_id(user_id).await? {
            Some(_) => {
                self.profile_repository
                    .update_employment(user_id, data)
                    .await?
            }
            None => {
                self.profile_repository
                    .create_profile(user_id, data)
                    .await?
            }
        };

        info!(%user_id, profile_id = profile.id, "Employment status saved");

        Ok(profile.into())
    }
}
