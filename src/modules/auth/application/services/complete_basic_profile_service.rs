use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{
        BasicProfileView, CompleteBasicProfileCommand, CompleteBasicProfileUseCase,
        RegistrationError,
    },
    outgoing::{BasicProfileData, UserQuery, UserRepository},
};

#[derive(Debug, Clone)]
pub struct CompleteBasicProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CompleteBasicProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CompleteBasicProfileUseCase for CompleteBasicProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CompleteBasicProfileCommand,
    ) -> Result<BasicProfileView, RegistrationError> {
        let user_id = command.user_id();

        if self.query.find_by_id(user_id).await?.is_none() {
            return Err(RegistrationError::UserNotFound);
        }

        if let Some(phone) = command.phone_number() {
            if let Some(owner) = self.query.find_by_phone(phone).await? {
                if owner.id != user_id {
                    warn!(%user_id, owner_id = %owner.id, "Phone number already registered");
                    return Err(RegistrationError::PhoneAlreadyRegistered);
                }
            }
        }

        let user = self
            .repository
            .update_basic_profile(
                user_id,
                BasicProfileData {
                    first_name: command.first_name().to_string(),
                    last_name: command.last_name().to_string(),
                    phone_number: command.phone_number().map(str::to_string),
                    country_code: command.country_code().to_string(),
                    country: command.country().to_string(),
                },
            )
            .await?;

        info!(%user_id, "Basic profile saved");

        Ok(user.into())
    }
}
