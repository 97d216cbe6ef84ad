//! In-memory stand-ins for the outgoing ports, shared by service tests.
//! Each fake is cheap to clone and clones share state, so a test can hand
//! one copy to the service and inspect the other afterwards.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{
    JobSeekerProfile, OtpVerification, User, UserId, UserRole,
};
use crate::auth::application::ports::outgoing::{
    BasicProfileData, CreateOtpData, CreateUserData, EmploymentData, HashError, JobPreferencesData,
    OtpCodeGenerator, OtpRepository, OtpRepositoryError, PasswordHasher, PermissionsData,
    ProfileRepository, ProfileRepositoryError, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn user(id: i64, email: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(id),
        email: email.to_string(),
        password_hash: "hashed:pw".to_string(),
        role,
        first_name: String::new(),
        last_name: String::new(),
        phone_number: None,
        country_code: String::new(),
        country: String::new(),
        profile_photo: None,
        is_email_verified: false,
        is_phone_verified: false,
        phone_verified_at: None,
        is_profile_complete: false,
        is_active: true,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn user_with_phone(id: i64, phone: &str) -> User {
    User {
        phone_number: Some(phone.to_string()),
        ..user(id, &format!("user{id}@example.com"), UserRole::JobSeeker)
    }
}

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id.value() == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn update<F>(&self, user_id: UserId, apply: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id && !u.is_deleted)
            .ok_or(UserRepositoryError::UserNotFound)?;
        apply(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id && !u.is_deleted)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && !u.is_deleted)
            .cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.phone_number.as_deref() == Some(phone_number) && !u.is_deleted)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == data.email && !u.is_deleted) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let next_id = users.iter().map(|u| u.id.value()).max().unwrap_or(0) + 1;
        let created = User {
            password_hash: data.password_hash,
            ..user(next_id, &data.email, data.role)
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_basic_profile(
        &self,
        user_id: UserId,
        data: BasicProfileData,
    ) -> Result<User, UserRepositoryError> {
        if let Some(phone) = data.phone_number.as_deref() {
            let taken = self.users.lock().unwrap().iter().any(|u| {
                u.id != user_id && !u.is_deleted && u.phone_number.as_deref() == Some(phone)
            });
            if taken {
                return Err(UserRepositoryError::PhoneAlreadyExists);
            }
        }

        self.update(user_id, |u| {
            u.first_name = data.first_name;
            u.last_name = data.last_name;
            if data.phone_number.is_some() {
                u.phone_number = data.phone_number;
            }
            u.country_code = data.country_code;
            u.country = data.country;
        })
    }

    async fn mark_phone_verified(
        &self,
        user_id: UserId,
        verified_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError> {
        self.update(user_id, |u| {
            u.is_phone_verified = true;
            u.phone_verified_at = Some(verified_at);
        })
    }

    async fn set_profile_photo(
        &self,
        user_id: UserId,
        photo_url: String,
    ) -> Result<User, UserRepositoryError> {
        self.update(user_id, |u| {
            u.profile_photo = Some(photo_url);
            u.is_profile_complete = true;
        })
    }
}

// ──────────────────────────────────────────────────────────
// Profiles
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    profiles: Arc<Mutex<Vec<JobSeekerProfile>>>,
}

impl InMemoryProfiles {
    pub fn get(&self, user_id: i64) -> Option<JobSeekerProfile> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id.value() == user_id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    fn update<F>(
        &self,
        user_id: UserId,
        apply: F,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError>
    where
        F: FnOnce(&mut JobSeekerProfile),
    {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;
        apply(profile);
        Ok(profile.clone())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<JobSeekerProfile>, ProfileRepositoryError> {
        Ok(self.get(user_id.value()))
    }

    async fn create_profile(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.user_id == user_id) {
            return Err(ProfileRepositoryError::ProfileAlreadyExists);
        }

        let profile = JobSeekerProfile {
            id: profiles.len() as i64 + 100,
            user_id,
            employment_status: data.employment_status,
            current_job_title: data.current_job_title,
            current_company: data.current_company,
            job_search_status: None,
            desired_positions: vec![],
            preferred_locations: vec![],
            job_types: vec![],
            notifications_enabled: false,
            location_enabled: false,
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update_employment(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        self.update(user_id, |p| {
            p.employment_status = data.employment_status;
            p.current_job_title = data.current_job_title;
            p.current_company = data.current_company;
        })
    }

    async fn update_preferences(
        &self,
        user_id: UserId,
        data: JobPreferencesData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        self.update(user_id, |p| {
            p.job_search_status = Some(data.job_search_status);
            p.desired_positions = data.desired_positions;
            p.preferred_locations = data.preferred_locations;
            p.job_types = data.job_types;
        })
    }

    async fn update_permissions(
        &self,
        user_id: UserId,
        data: PermissionsData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        self.update(user_id, |p| {
            p.notifications_enabled = data.notifications_enabled;
            p.location_enabled = data.location_enabled;
        })
    }
}

// ──────────────────────────────────────────────────────────
// OTPs
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryOtps {
    otps: Arc<Mutex<Vec<OtpVerification>>>,
}

impl InMemoryOtps {
    pub fn insert(&self, otp: OtpVerification) {
        self.otps.lock().unwrap().push(otp);
    }

    pub fn all(&self) -> Vec<OtpVerification> {
        self.otps.lock().unwrap().clone()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtps {
    async fn create_otp(&self, data: CreateOtpData) -> Result<OtpVerification, OtpRepositoryError> {
        let mut otps = self.otps.lock().unwrap();
        let otp = OtpVerification {
            id: otps.len() as i64 + 1,
            user_id: data.user_id,
            phone_number: data.phone_number,
            otp_code: data.otp_code,
            purpose: data.purpose,
            expires_at: data.expires_at,
            is_used: false,
            created_at: data.created_at,
        };
        otps.push(otp.clone());
        Ok(otp)
    }

    async fn find_latest(
        &self,
        phone_number: &str,
        purpose: &str,
        otp_code: &str,
    ) -> Result<Option<OtpVerification>, OtpRepositoryError> {
        Ok(self
            .otps
            .lock()
            .unwrap()
            .iter()
            .filter(|o| {
                o.phone_number == phone_number && o.purpose == purpose && o.otp_code == otp_code
            })
            .max_by_key(|o| (!o.is_used, o.created_at, o.id))
            .cloned())
    }

    async fn mark_used(&self, otp_id: i64) -> Result<(), OtpRepositoryError> {
        let mut otps = self.otps.lock().unwrap();
        match otps.iter_mut().find(|o| o.id == otp_id && !o.is_used) {
            Some(otp) => {
                otp.is_used = true;
                Ok(())
            }
            None => Err(OtpRepositoryError::AlreadyUsed),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Hasher and generator
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }
}

pub struct FixedOtpGenerator(pub &'static str);

impl OtpCodeGenerator for FixedOtpGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}
