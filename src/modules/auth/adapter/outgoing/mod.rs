pub mod jwt;
pub mod otp_repository_postgres;
pub mod profile_repository_postgres;
pub mod random_otp_generator;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;
