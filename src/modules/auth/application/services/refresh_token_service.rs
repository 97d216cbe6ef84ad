use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{RefreshTokenError, RefreshTokenRequest, RefreshTokenUseCase},
    outgoing::{TokenPair, TokenProvider, REFRESH_TOKEN_TYPE},
};

/// Exchanges a refresh token for a new pair bound to the same user and role.
#[derive(Clone)]
pub struct RefreshTokenService {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenService {
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<TokenPair, RefreshTokenError> {
        let claims = self.token_provider.verify_token(request.refresh_token())?;

        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        self.token_provider
            .issue_token_pair(claims.user_id(), claims.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))
    }
}
