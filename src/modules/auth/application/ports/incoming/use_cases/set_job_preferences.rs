use async_trait::async_trait;

use super::{input_rules, JobSeekerProfileView, RegistrationError};
use crate::auth::application::domain::entities::{JobSearchStatus, JobType, UserId};

#[derive(Debug, Clone)]
pub struct SetJobPreferencesCommand {
    user_id: UserId,
    job_search_status: JobSearchStatus,
    desired_positions: Vec<String>,
    preferred_locations: Vec<String>,
    job_types: Vec<JobType>,
}

impl SetJobPreferencesCommand {
    pub fn new(
        user_id: UserId,
        job_search_status: JobSearchStatus,
        desired_positions: Vec<String>,
        preferred_locations: Vec<String>,
        job_types: Vec<JobType>,
    ) -> Self {
        // Job types behave as a set; first occurrence keeps its position.
        let mut unique_types: Vec<JobType> = Vec::with_capacity(job_types.len());
        for job_type in job_types {
            if !unique_types.contains(&job_type) {
                unique_types.push(job_type);
            }
        }

        Self {
            user_id,
            job_search_status,
            desired_positions: input_rules::text_list(desired_positions),
            preferred_locations: input_rules::text_list(preferred_locations),
            job_types: unique_types,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn job_search_status(&self) -> JobSearchStatus {
        self.job_search_status
    }

    pub fn desired_positions(&self) -> &[String] {
        &self.desired_positions
    }

    pub fn preferred_locations(&self) -> &[String] {
        &self.preferred_locations
    }

    pub fn job_types(&self) -> &[JobType] {
        &self.job_types
    }
}

#[async_trait]
pub trait SetJobPreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SetJobPreferencesCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError>;
}
