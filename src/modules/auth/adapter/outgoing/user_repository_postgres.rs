use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    BasicProfileData, CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_live(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .filter(UserColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn save(&self, active_user: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(map_write_error)?;
        Self::map_to_user(updated)
    }

    fn map_to_user(model: UserModel) -> Result<User, UserRepositoryError> {
        model
            .into_user()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

// Email and phone are the only unique columns; the phone index name
// tells them apart.
fn map_write_error(e: DbErr) -> UserRepositoryError {
    if is_unique_violation(&e) {
        if e.to_string().to_lowercase().contains("phone") {
            return UserRepositoryError::PhoneAlreadyExists;
        }
        return UserRepositoryError::EmailAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: NotSet,
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            phone_number: Set(None),
            country_code: Set(String::new()),
            country: Set(String::new()),
            profile_photo: Set(None),
            is_email_verified: Set(false),
            is_phone_verified: Set(false),
            phone_verified_at: Set(None),
            is_profile_complete: Set(false),
            is_active: Set(true),
            is_deleted: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_write_error)?;

        Self::map_to_user(inserted)
    }

    async fn update_basic_profile(
        &self,
        user_id: UserId,
        data: BasicProfileData,
    ) -> Result<User, UserRepositoryError> {
        let user = self.find_live(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.first_name = Set(data.first_name);
        active_user.last_name = Set(data.last_name);
        active_user.country_code = Set(data.country_code);
        active_user.country = Set(data.country);
        if let Some(phone) = data.phone_number {
            active_user.phone_number = Set(Some(phone));
        }

        self.save(active_user).await
    }

    async fn mark_phone_verified(
        &self,
        user_id: UserId,
        verified_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError> {
        let user = self.find_live(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_phone_verified = Set(true);
        active_user.phone_verified_at = Set(Some(verified_at.into()));

        self.save(active_user).await
    }

    async fn set_profile_photo(
        &self,
        user_id: UserId,
        photo_url: String,
    ) -> Result<User, UserRepositoryError> {
        let user = self.find_live(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.profile_photo = Set(Some(photo_url));
        active_user.is_profile_complete = Set(true);

        self.save(active_user).await
    }
}
