use sea_orm_migration::prelude::*;

use crate::m20250304_105428_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OtpVerifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OtpVerifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::UserId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::PhoneNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::OtpCode)
                            .string_len(6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::Purpose)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OtpVerifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_otp_verifications_user")
                            .from(OtpVerifications::Table, OtpVerifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_otp_verifications_lookup")
                    .table(OtpVerifications::Table)
                    .col(OtpVerifications::PhoneNumber)
                    .col(OtpVerifications::Purpose)
                    .col(OtpVerifications::OtpCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OtpVerifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OtpVerifications {
    Table,
    Id,
    UserId,
    PhoneNumber,
    OtpCode,
    Purpose,
    ExpiresAt,
    IsUsed,
    CreatedAt,
}
