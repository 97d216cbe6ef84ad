use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{UnknownVariant, User, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(nullable)]
    pub phone_number: Option<String>,
    pub country_code: String,
    pub country: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_photo: Option<String>,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    #[sea_orm(nullable)]
    pub phone_verified_at: Option<DateTimeWithTimeZone>,
    pub is_profile_complete: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::job_seeker_profiles::Entity")]
    JobSeekerProfile,
}

impl Related<super::job_seeker_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobSeekerProfile.def()
    }
}

impl Model {
    /// Rows carry the role as text; an unknown value means the row was
    /// written by something other than this service.
    pub fn into_user(self) -> Result<User, UnknownVariant> {
        Ok(User {
            id: UserId::from(self.id),
            role: self.role.parse()?,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            country_code: self.country_code,
            country: self.country,
            profile_photo: self.profile_photo,
            is_email_verified: self.is_email_verified,
            is_phone_verified: self.is_phone_verified,
            phone_verified_at: self
                .phone_verified_at
                .map(|at| at.with_timezone(&chrono::Utc)),
            is_profile_complete: self.is_profile_complete,
            is_active: self.is_active,
            is_deleted: self.is_deleted,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
