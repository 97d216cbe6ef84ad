use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{OtpVerification, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otp_verifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(nullable)]
    pub user_id: Option<i64>,
    pub phone_number: String,
    pub otp_code: String,
    pub purpose: String,
    pub expires_at: DateTimeWithTimeZone,
    pub is_used: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OtpVerification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id.map(UserId::from),
            phone_number: model.phone_number,
            otp_code: model.otp_code,
            purpose: model.purpose,
            expires_at: model.expires_at.with_timezone(&chrono::Utc),
            is_used: model.is_used,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}
