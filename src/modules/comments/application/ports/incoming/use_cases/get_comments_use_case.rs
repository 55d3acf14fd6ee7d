use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::ports::outgoing::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    /// Active comments of a listing, oldest first.
    async fn execute(&self, listing_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError>;
}
