use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_seeker_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub user_id: i64,

    pub employment_status: String,

    #[sea_orm(nullable)]
    pub current_job_title: Option<String>,

    #[sea_orm(nullable)]
    pub current_company: Option<String>,

    #[sea_orm(nullable)]
    pub job_search_status: Option<String>,

    // Lists are stored as JSONB arrays of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub desired_positions: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub preferred_locations: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub job_types: Json,

    pub notifications_enabled: bool,
    pub location_enabled: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
