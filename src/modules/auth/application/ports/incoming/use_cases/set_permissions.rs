use async_trait::async_trait;

use super::{JobSeekerProfileView, RegistrationError};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy)]
pub struct SetPermissionsCommand {
    pub user_id: UserId,
    pub notifications_enabled: bool,
    pub location_enabled: bool,
}

#[async_trait]
pub trait SetPermissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SetPermissionsCommand,
    ) -> Result<JobSeekerProfileView, RegistrationError>;
}
