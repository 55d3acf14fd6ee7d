use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::ports::{
    incoming::use_cases::{GetCommentsError, GetCommentsUseCase},
    outgoing::{CommentRepository, CommentResult},
};

#[derive(Debug, Clone)]
pub struct GetCommentsService<C>
where
    C: CommentRepository + Send + Sync,
{
    repository: C,
}

impl<C> GetCommentsService<C>
where
    C: CommentRepository + Send + Sync,
{
    pub fn new(repository: C) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C> GetCommentsUseCase for GetCommentsService<C>
where
    C: CommentRepository + Send + Sync,
{
    async fn execute(&self, listing_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError> {
        self.repository
            .comments_for_listing(listing_id)
            .await
            .map_err(|e| GetCommentsError::RepositoryError(e.to_string()))
    }
}
