use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{TokenError, TokenPair};

//
// ──────────────────────────────────────────────────────────
// Refresh Token Request
// ──────────────────────────────────────────────────────────
//

/// Refresh token guaranteed non-empty once constructed.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let token = refresh_token.trim();
        if token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshTokenError::TokenNotYetValid,
            TokenError::InvalidSignature | TokenError::MalformedToken => {
                RefreshTokenError::TokenInvalid
            }
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<TokenPair, RefreshTokenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_trimmed() {
        let request = RefreshTokenRequest::new("  token_123  ".to_string()).unwrap();
        assert_eq!(request.refresh_token(), "token_123");
    }

    #[test]
    fn test_whitespace_only_request_rejected() {
        assert_eq!(
            RefreshTokenRequest::new("   ".to_string()).unwrap_err(),
            RefreshTokenRequestError::EmptyToken
        );
    }

    #[test]
    fn test_token_error_conversion() {
        assert!(matches!(
            RefreshTokenError::from(TokenError::TokenExpired),
            RefreshTokenError::TokenExpired
        ));
        assert!(matches!(
            RefreshTokenError::from(TokenError::InvalidSignature),
            RefreshTokenError::TokenInvalid
        ));
        assert!(matches!(
            RefreshTokenError::from(TokenError::TokenNotYetValid),
            RefreshTokenError::TokenNotYetValid
        ));
        assert!(matches!(
            RefreshTokenError::from(TokenError::EncodingError("bad key".into())),
            RefreshTokenError::TokenGenerationFailed(msg) if msg == "bad key"
        ));
    }
}
