use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::{
    incoming::use_cases::{GetUserProfileError, GetUserProfileUseCase},
    outgoing::{UserRepository, UserResult},
};

#[derive(Debug, Clone)]
pub struct GetUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserProfileUseCase for GetUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserResult, GetUserProfileError> {
        self.repository
            .find_user_by_id(user_id)
            .await
            .map_err(|e| GetUserProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetUserProfileError::UserNotFound)
    }
}
