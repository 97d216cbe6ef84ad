use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{JobSeekerProfile, UserId};
use crate::auth::application::ports::outgoing::profile_repository::{
    EmploymentData, JobPreferencesData, PermissionsData, ProfileRepository, ProfileRepositoryError,
};

use super::sea_orm_entity::job_seeker_profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
    Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        user_id: UserId,
    ) -> Result<Option<ProfileModel>, ProfileRepositoryError> {
        ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
    }

    async fn require_model(&self, user_id: UserId) -> Result<ProfileModel, ProfileRepositoryError> {
        self.find_model(user_id)
            .await?
            .ok_or(ProfileRepositoryError::ProfileNotFound)
    }

    async fn save(
        &self,
        active_profile: ProfileActiveModel,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let updated = active_profile
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        map_to_profile(updated)
    }
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(data).map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProfileRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))
}

fn map_to_profile(model: ProfileModel) -> Result<JobSeekerProfile, ProfileRepositoryError> {
    let invalid = |e: crate::auth::application::domain::entities::UnknownVariant| {
        ProfileRepositoryError::DatabaseError(e.to_string())
    };

    Ok(JobSeekerProfile {
        id: model.id,
        user_id: UserId::from(model.user_id),
        employment_status: model.employment_status.parse().map_err(invalid)?,
        current_job_title: model.current_job_title,
        current_company: model.current_company,
        job_search_status: model
            .job_search_status
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(invalid)?,
        desired_positions: from_json(&model.desired_positions)?,
        preferred_locations: from_json(&model.preferred_locations)?,
        job_types: from_json(&model.job_types)?,
        notifications_enabled: model.notifications_enabled,
        location_enabled: model.location_enabled,
    })
}

fn map_insert_error(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string().to_lowercase();
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || msg.contains("23505")
        || msg.contains("duplicate key")
    {
        return ProfileRepositoryError::ProfileAlreadyExists;
    }
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<JobSeekerProfile>, ProfileRepositoryError> {
        self.find_model(user_id)
            .await?
            .map(map_to_profile)
            .transpose()
    }

    async fn create_profile(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let now = Utc::now();
        let empty = serde_json::json!([]);

        let active_profile = ProfileActiveModel {
            id: NotSet,
            user_id: Set(user_id.value()),
            employment_status: Set(data.employment_status.as_str().to_string()),
            current_job_title: Set(data.current_job_title),
            current_company: Set(data.current_company),
            job_search_status: Set(None),
            desired_positions: Set(empty.clone()),
            preferred_locations: Set(empty.clone()),
            job_types: Set(empty),
            notifications_enabled: Set(false),
            location_enabled: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_profile
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        map_to_profile(inserted)
    }

    async fn update_employment(
        &self,
        user_id: UserId,
        data: EmploymentData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let profile = self.require_model(user_id).await?;

        let mut active_profile: ProfileActiveModel = profile.into();
        active_profile.employment_status = Set(data.employment_status.as_str().to_string());
        active_profile.current_job_title = Set(data.current_job_title);
        active_profile.current_company = Set(data.current_company);

        self.save(active_profile).await
    }

    async fn update_preferences(
        &self,
        user_id: UserId,
        data: JobPreferencesData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let profile = self.require_model(user_id).await?;

        let mut active_profile: ProfileActiveModel = profile.into();
        active_profile.job_search_status = Set(Some(data.job_search_status.as_str().to_string()));
        active_profile.desired_positions = Set(to_json(&data.desired_positions)?);
        active_profile.preferred_locations = Set(to_json(&data.preferred_locations)?);
        active_profile.job_types = Set(to_json(&data.job_types)?);

        self.save(active_profile).await
    }

    async fn update_permissions(
        &self,
        user_id: UserId,
        data: PermissionsData,
    ) -> Result<JobSeekerProfile, ProfileRepositoryError> {
        let profile = self.require_model(user_id).await?;

        let mut active_profile: ProfileActiveModel = profile.into();
        active_profile.notifications_enabled = Set(data.notifications_enabled);
        active_profile.location_enabled = Set(data.location_enabled);

        self.save(active_profile).await
    }
}
