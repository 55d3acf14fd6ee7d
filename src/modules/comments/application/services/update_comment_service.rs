use async_trait::async_trait;

use crate::comments::application::ports::{
    incoming::use_cases::{UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase},
    outgoing::{CommentRepository, CommentRepositoryError, CommentResult, UpdateCommentData},
};

/// Edits an existing comment. Deliberately has no notifier dependency:
/// notification is a creation-only side effect.
#[derive(Debug, Clone)]
pub struct UpdateCommentService<C>
where
    C: CommentRepository + Send + Sync,
{
    repository: C,
}

impl<C> UpdateCommentService<C>
where
    C: CommentRepository + Send + Sync,
{
    pub fn new(repository: C) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<C> UpdateCommentUseCase for UpdateCommentService<C>
where
    C: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        let data = UpdateCommentData {
            content: command.content().cloned(),
            is_active: command.is_active(),
        };

        self.repository
            .update_comment(command.comment_id(), data)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => UpdateCommentError::CommentNotFound,
                other => UpdateCommentError::RepositoryError(other.to_string()),
            })
    }
}
