use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::OtpVerification;
use crate::auth::application::ports::outgoing::otp_repository::{
    CreateOtpData, OtpRepository, OtpRepositoryError,
};

use super::sea_orm_entity::otp_verifications::{
    ActiveModel as OtpActiveModel, Column as OtpColumn, Entity as OtpEntity,
};

#[derive(Clone, Debug)]
pub struct OtpRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OtpRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpRepository for OtpRepositoryPostgres {
    async fn create_otp(&self, data: CreateOtpData) -> Result<OtpVerification, OtpRepositoryError> {
        let active_otp = OtpActiveModel {
            id: NotSet,
            user_id: Set(data.user_id.map(|id| id.value())),
            phone_number: Set(data.phone_number),
            otp_code: Set(data.otp_code),
            purpose: Set(data.purpose),
            expires_at: Set(data.expires_at.into()),
            is_used: Set(false),
            created_at: Set(data.created_at.into()),
        };

        let inserted = active_otp
            .insert(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn find_latest(
        &self,
        phone_number: &str,
        purpose: &str,
        otp_code: &str,
    ) -> Result<Option<OtpVerification>, OtpRepositoryError> {
        let otp = OtpEntity::find()
            .filter(OtpColumn::PhoneNumber.eq(phone_number))
            .filter(OtpColumn::Purpose.eq(purpose))
            .filter(OtpColumn::OtpCode.eq(otp_code))
            // false sorts before true
            .order_by_asc(OtpColumn::IsUsed)
            .order_by_desc(OtpColumn::CreatedAt)
            .order_by_desc(OtpColumn::Id)
            .one(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        Ok(otp.map(OtpVerification::from))
    }

    async fn mark_used(&self, otp_id: i64) -> Result<(), OtpRepositoryError> {
        let result = OtpEntity::update_many()
            .col_expr(OtpColumn::IsUsed, Expr::value(true))
            .filter(OtpColumn::Id.eq(otp_id))
            .filter(OtpColumn::IsUsed.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(OtpRepositoryError::AlreadyUsed);
        }

        Ok(())
    }
}
