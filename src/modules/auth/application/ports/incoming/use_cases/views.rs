use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{
    EmploymentStatus, JobSearchStatus, JobSeekerProfile, JobType, User, UserId,
};

//
// ──────────────────────────────────────────────────────────
// Basic profile (steps 2 and 4)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BasicProfileView {
    #[schema(value_type = i64, example = 42)]
    pub user_id: UserId,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "+6281234567890")]
    pub phone_number: Option<String>,
    #[schema(example = "+62")]
    pub country_code: String,
    #[schema(example = "Indonesia")]
    pub country: String,
    pub is_phone_verified: bool,
}

impl From<User> for BasicProfileView {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            country_code: user.country_code,
            country: user.country,
            is_phone_verified: user.is_phone_verified,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Job-seeker profile (steps 5, 6 and 7)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct JobSeekerProfileView {
    pub profile_id: i64,
    #[schema(value_type = i64)]
    pub user_id: UserId,
    pub employment_status: EmploymentStatus,
    pub current_job_title: Option<String>,
    pub current_company: Option<String>,
    pub job_search_status: Option<JobSearchStatus>,
    pub desired_positions: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub job_types: Vec<JobType>,
    pub notifications_enabled: bool,
    pub location_enabled: bool,
}

impl From<JobSeekerProfile> for JobSeekerProfileView {
    fn from(profile: JobSeekerProfile) -> Self {
        Self {
            profile_id: profile.id,
            user_id: profile.user_id,
            employment_status: profile.employment_status,
            current_job_title: profile.current_job_title,
            current_company: profile.current_company,
            job_search_status: profile.job_search_status,
            desired_positions: profile.desired_positions,
            preferred_locations: profile.preferred_locations,
            job_types: profile.job_types,
            notifications_enabled: profile.notifications_enabled,
            location_enabled: profile.location_enabled,
        }
    }
}
