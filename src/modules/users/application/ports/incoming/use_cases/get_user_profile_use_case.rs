use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::ports::outgoing::UserResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserResult, GetUserProfileError>;
}
