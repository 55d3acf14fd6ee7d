use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::ports::outgoing::CommentResult;

//
// ──────────────────────────────────────────────────────────
// Create Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    listing_id: Uuid,
    author_name: String,
    content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCommentCommandError {
    #[error("Author name cannot be empty")]
    EmptyAuthorName,

    #[error("Author name too long")]
    AuthorNameTooLong,

    #[error("Comment cannot be empty")]
    EmptyContent,
}

impl CreateCommentCommand {
    pub fn new(
        listing_id: Uuid,
        author_name: String,
        content: String,
    ) -> Result<Self, CreateCommentCommandError> {
        let author_name = author_name.trim();
        let content = content.trim();

        if author_name.is_empty() {
            return Err(CreateCommentCommandError::EmptyAuthorName);
        }

        if author_name.len() > 30 {
            return Err(CreateCommentCommandError::AuthorNameTooLong);
        }

        if content.is_empty() {
            return Err(CreateCommentCommandError::EmptyContent);
        }

        Ok(Self {
            listing_id,
            author_name: author_name.to_string(),
            content: content.to_string(),
        })
    }

    pub fn listing_id(&self) -> Uuid {
        self.listing_id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError>;
}
