use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::ports::outgoing::CommentResult;

//
// ──────────────────────────────────────────────────────────
// Update Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    comment_id: Uuid,
    content: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCommentCommandError {
    #[error("Comment cannot be empty")]
    EmptyContent,

    #[error("Nothing to update")]
    NoChanges,
}

impl UpdateCommentCommand {
    pub fn new(
        comment_id: Uuid,
        content: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, UpdateCommentCommandError> {
        let content = content.map(|c| c.trim().to_string());

        if let Some(content) = &content {
            if content.is_empty() {
                return Err(UpdateCommentCommandError::EmptyContent);
            }
        }

        if content.is_none() && is_active.is_none() {
            return Err(UpdateCommentCommandError::NoChanges);
        }

        Ok(Self {
            comment_id,
            content,
            is_active,
        })
    }

    pub fn comment_id(&self) -> Uuid {
        self.comment_id
    }

    pub fn content(&self) -> Option<&String> {
        self.content.as_ref()
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Edits an existing comment. Updates never dispatch notifications; only
/// freshly created comments do.
#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError>;
}
