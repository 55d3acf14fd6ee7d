use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    /// A listing owned by the user could not be deleted; the user row is
    /// left in place.
    #[error("Deleting an owned listing failed: {0}")]
    ListingDeletionFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Deletes a user only after every owned listing has been deleted through
/// the listing cascade, one listing at a time.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError>;
}
