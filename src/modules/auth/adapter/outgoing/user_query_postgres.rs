use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn live_users() -> Select<UserEntity> {
        UserEntity::find().filter(UserColumn::IsDeleted.eq(false))
    }

    async fn fetch_one(&self, select: Select<UserEntity>) -> Result<Option<User>, UserQueryError> {
        let model = select
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_user).transpose()
    }

    fn map_to_user(model: UserModel) -> Result<User, UserQueryError> {
        model
            .into_user()
            .map_err(|e| UserQueryError::InvalidRecord(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        self.fetch_one(Self::live_users().filter(UserColumn::Id.eq(user_id.value())))
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.fetch_one(Self::live_users().filter(UserColumn::Email.eq(email)))
            .await
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, UserQueryError> {
        self.fetch_one(Self::live_users().filter(UserColumn::PhoneNumber.eq(phone_number)))
            .await
    }
}
