#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::ports::outgoing::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig {
            issuer: "jobfair-test".to_string(),
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        };
        JwtTokenService::new(jwt_config)
    }

    pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(create_test_jwt_service())
    }

    /// `Authorization` header value carrying a fresh access token.
    pub fn bearer_for(user_id: i64, role: UserRole) -> String {
        let token = create_test_jwt_service()
            .generate_access_token(UserId::from(user_id), role)
            .expect("test token");
        format!("Bearer {}", token)
    }
}
