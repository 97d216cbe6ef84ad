pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::otp_repository_postgres::OtpRepositoryPostgres;
use crate::auth::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::auth::adapter::outgoing::random_otp_generator::RandomOtpGenerator;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::domain::otp_policy::OtpPolicy;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    CompleteBasicProfileUseCase, RefreshTokenUseCase, SendPhoneOtpUseCase,
    SetEmploymentStatusUseCase, SetJobPreferencesUseCase, SetPermissionsUseCase,
    SetProfilePhotoUseCase, VerifyPhoneOtpUseCase,
};
use crate::auth::application::ports::outgoing::{OtpCodeGenerator, TokenProvider};
use crate::auth::application::services::{
    CompleteBasicProfileService, CreateAccountService, RefreshTokenService, SendPhoneOtpService,
    SetEmploymentStatusService, SetJobPreferencesService, SetPermissionsService,
    SetProfilePhotoService, VerifyPhoneOtpService,
};
use crate::shared::api::custom_json_config;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub complete_basic_profile_use_case: Arc<dyn CompleteBasicProfileUseCase + Send + Sync>,
    pub send_phone_otp_use_case: Arc<dyn SendPhoneOtpUseCase + Send + Sync>,
    pub verify_phone_otp_use_case: Arc<dyn VerifyPhoneOtpUseCase + Send + Sync>,
    pub set_employment_status_use_case: Arc<dyn SetEmploymentStatusUseCase + Send + Sync>,
    pub set_job_preferences_use_case: Arc<dyn SetJobPreferencesUseCase + Send + Sync>,
    pub set_permissions_use_case: Arc<dyn SetPermissionsUseCase + Send + Sync>,
    pub set_profile_photo_use_case: Arc<dyn SetProfilePhotoUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let host = env::var("HOST").context("HOST is not set")?;
    let port = env::var("PORT").context("PORT is not set")?;
    let server_url = format!("{host}:{port}");

    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let password_hasher = Argon2Hasher::from_env().context("Invalid Argon2 configuration")?;
    let otp_policy = OtpPolicy::from_env().context("Invalid OTP configuration")?;
    if otp_policy.master_code_enabled() {
        warn!(environment = %rust_env, "OTP master code is ENABLED");
    }

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let otp_repo = OtpRepositoryPostgres::new(Arc::clone(&db_arc));
    let otp_generator: Arc<dyn OtpCodeGenerator> = Arc::new(RandomOtpGenerator);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    // Step 1
    let create_account_service = CreateAccountService::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::new(password_hasher),
    );
    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        Arc::new(create_account_service),
        Arc::clone(&token_provider_arc),
    );

    // Steps 2 to 8
    let complete_basic_profile_service =
        CompleteBasicProfileService::new(user_query.clone(), user_repo.clone());
    let send_phone_otp_service = SendPhoneOtpService::new(
        user_query.clone(),
        otp_repo.clone(),
        otp_generator,
        otp_policy.clone(),
    );
    let verify_phone_otp_service =
        VerifyPhoneOtpService::new(user_query.clone(), user_repo.clone(), otp_repo, otp_policy);
    let set_employment_status_service =
        SetEmploymentStatusService::new(user_query, profile_repo.clone());
    let set_job_preferences_service = SetJobPreferencesService::new(profile_repo.clone());
    let set_permissions_service = SetPermissionsService::new(profile_repo);
    let set_profile_photo_service = SetProfilePhotoService::new(user_repo);

    let refresh_token_service = RefreshTokenService::new(Arc::clone(&token_provider_arc));

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        complete_basic_profile_use_case: Arc::new(complete_basic_profile_service),
        send_phone_otp_use_case: Arc::new(send_phone_otp_service),
        verify_phone_otp_use_case: Arc::new(verify_phone_otp_service),
        set_employment_status_use_case: Arc::new(set_employment_status_service),
        set_job_preferences_use_case: Arc::new(set_job_preferences_service),
        set_permissions_use_case: Arc::new(set_permissions_service),
        set_profile_photo_use_case: Arc::new(set_profile_photo_service),
        refresh_token_use_case: Arc::new(refresh_token_service),
    };

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Registration
    cfg.service(routes::register_account_handler);
    cfg.service(routes::complete_basic_profile_handler);
    cfg.service(routes::send_phone_otp_handler);
    cfg.service(routes::verify_phone_otp_handler);
    cfg.service(routes::set_employment_status_handler);
    cfg.service(routes::set_job_preferences_handler);
    cfg.service(routes::set_permissions_handler);
    cfg.service(routes::set_profile_photo_handler);
    // Auth
    cfg.service(routes::refresh_token_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
