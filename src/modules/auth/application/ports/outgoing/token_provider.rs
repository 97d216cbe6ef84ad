use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{UserId, UserRole};

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: i64,           // User ID
    pub role: UserRole,     // Role the token was issued for
    pub iss: String,        // Issuer
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub token_type: String, // "access" or "refresh"
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.sub)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: UserId, role: UserRole) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, user_id: UserId, role: UserRole)
        -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn issue_token_pair(&self, user_id: UserId, role: UserRole) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user_id, role)?,
            refresh_token: self.generate_refresh_token(user_id, role)?,
        })
    }
}
