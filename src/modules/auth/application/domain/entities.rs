use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric identity of a user as assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown {kind} value: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// Text-backed enums share the same as_str / FromStr plumbing.
macro_rules! text_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownVariant::new($kind, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Employer,
    Admin,
}

text_enum!(UserRole, "role", {
    JobSeeker => "job_seeker",
    Employer => "employer",
    Admin => "admin",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    SelfEmployed,
    Student,
}

text_enum!(EmploymentStatus, "employment status", {
    Employed => "employed",
    Unemployed => "unemployed",
    SelfEmployed => "self_employed",
    Student => "student",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobSearchStatus {
    ActivelyLooking,
    OpenToOffers,
    NotLooking,
}

text_enum!(JobSearchStatus, "job search status", {
    ActivelyLooking => "actively_looking",
    OpenToOffers => "open_to_offers",
    NotLooking => "not_looking",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
    Remote,
}

text_enum!(JobType, "job type", {
    FullTime => "full_time",
    PartTime => "part_time",
    Contract => "contract",
    Internship => "internship",
    Freelance => "freelance",
    Remote => "remote",
});

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub country_code: String,
    pub country: String,
    pub profile_photo: Option<String>,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub phone_verified_at: Option<DateTime<Utc>>,
    pub is_profile_complete: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobSeekerProfile {
    pub id: i64,
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

pub const PHONE_VERIFICATION_PURPOSE: &str = "phone_verification";

#[derive(Debug, Clone, PartialEq)]
pub struct OtpVerification {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub phone_number: String,
    pub otp_code: String,
    pub purpose: String,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

impl OtpVerification {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
