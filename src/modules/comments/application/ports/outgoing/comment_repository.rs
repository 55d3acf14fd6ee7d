use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub listing_id: Uuid,
    /// Free-text author name; commenters are not accounts.
    pub author_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentData {
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentResult {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Comment not found")]
    CommentNotFound,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError>;

    /// Active comments of a listing, oldest first.
    async fn comments_for_listing(
        &self,
        listing_id: Uuid,
    ) -> Result<Vec<CommentResult>, CommentRepositoryError>;

    async fn update_comment(
        &self,
        comment_id: Uuid,
        data: UpdateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError>;
}
