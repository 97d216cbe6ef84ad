use async_trait::async_trait;

use super::{input_rules, JobSeekerProfileView, RegistrationError};
use crate::auth::application::domain::entities::{EmploymentStatus, UserId};

#[derive(Debug, Clone)]
pub struct SetEmploymentStatusCommand {
    user_id: UserId,
    employment_status: EmploymentStatus,
    current_job_title: Option<String>,
    current_company: Option<String>,
}

impl SetEmploymentStatusCommand {
    /// Blank job title or company collapse to `None`.
    pub fn new(
        user_id: UserId,
        employment_status: EmploymentStatus,
        current_job_title: Option<String>,
        current_company: Option<String>,
    ) -> Self {
        Self {
            user_id,
            employment_status,
            current_job_title: input_rules::optional_text(current_job_title),
            current_company: input_rules::optional_text(current_company),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn employment_status(&self) -> EmploymentStatus {
        self.employment_status
    }

    pub fn current_job_title(&self) -> Option<&str> {
        self.current_job_title.as_deref()
    }

    pub fn current_company(&self) -> Option<&str> {
        self.current_company.as_deref()
    }
}

#[async_trait]
pub trait SetEmploymentStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SetEmploymentStatusCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError>;
}
