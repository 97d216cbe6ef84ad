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
                    .table(JobSeekerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobSeekerProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::EmploymentStatus)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CurrentJobTitle)
                            .string_len(150)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CurrentCompany)
                            .string_len(150)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::JobSearchStatus)
                            .string_len(30)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::DesiredPositions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::PreferredLocations)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::JobTypes)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::NotificationsEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::LocationEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_seeker_profiles_user")
                            .from(JobSeekerProfiles::Table, JobSeekerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_job_seeker_profiles_updated_at
                BEFORE UPDATE ON job_seeker_profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_job_seeker_profiles_updated_at ON job_seeker_profiles",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobSeekerProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobSeekerProfiles {
    Table,
    Id,
    UserId,
    EmploymentStatus,
    CurrentJobTitle,
    CurrentCompany,
    JobSearchStatus,
    DesiredPositions,
    PreferredLocations,
    JobTypes,
    NotificationsEnabled,
    LocationEnabled,
    CreatedAt,
    UpdatedAt,
}
