use async_trait::async_trait;

use crate::auth::application::domain::entities::{
    EmploymentStatus, JobSearchStatus, JobSeekerProfile, JobType, UserId,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentData {
    pub employment_status: EmploymentStatus,
    pub current_job_title: Option<String>,
    pub current_company: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobPreferencesData {
    pub job_search_status: JobSearchStatus,
    pub desired_positions: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub job_types: Vec<JobType>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermissionsData {
    pub notifications_enabled: bool,
    pub location_enabled: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Profile already exists")]
    ProfileAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Job-seeker profiles, one per user, addressed by user id.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<JobSeekerProfile>, ProfileRepositoryError>;

    async fn create_profile(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError>;

    async fn update_employment(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError>;

    async fn update_preferences(
        &self,
        user_id: UserId,
        data: JobPreferencesData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError>;

    async fn update_permissions(
        &self,
        user_id: UserId,
        data: PermissionsData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError>;
}
