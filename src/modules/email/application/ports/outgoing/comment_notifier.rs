use uuid::Uuid;

/// Everything the notification channel needs to tell a listing author about
/// a freshly posted comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommentNotification {
    pub comment_id: Uuid,
    pub listing_title: String,
    pub recipient_username: String,
    pub recipient_email: String,
    pub comment_author: String,
    pub comment_content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait CommentNotifier: Send + Sync {
    async fn notify_new_comment(
        &self,
        notification: NewCommentNotification,
    ) -> Result<(), CommentNotificationError>;
}
