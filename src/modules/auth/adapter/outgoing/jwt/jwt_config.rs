use std::env;

pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidExpiry(&'static str),

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds")]
    AccessExpiryOutOfRange,

    #[error("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY")]
    RefreshNotLongerThanAccess,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry(key)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from `JWT_SECRET`, `JWT_ISSUER`,
    /// `JWT_ACCESS_EXPIRY` and `JWT_REFRESH_EXPIRY`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", 1800)?;
        let refresh_token_expiry = Self::parse_expiry("JWT_REFRESH_EXPIRY", 604800)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(JwtConfigError::AccessExpiryOutOfRange);
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(JwtConfigError::RefreshNotLongerThanAccess);
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "jobfair-auth".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
