use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::comment_notifier::{
    CommentNotificationError, CommentNotifier, NewCommentNotification,
};
use crate::email::application::ports::outgoing::email_sender::EmailSender;

/// Renders and sends the "new comment on your listing" email.
#[derive(Clone)]
pub struct CommentEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for CommentEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl CommentEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn subject(notification: &NewCommentNotification) -> String {
        format!("New comment on \"{}\"", notification.listing_title)
    }

    fn body(notification: &NewCommentNotification) -> String {
        format!(
            "<p>Hello {},</p>\
             <p>{} commented on your listing \"{}\":</p>\
             <blockquote>{}</blockquote>",
            notification.recipient_username,
            notification.comment_author,
            notification.listing_title,
            notification.comment_content,
        )
    }
}

#[async_trait::async_trait]
impl CommentNotifier for CommentEmailService {
    async fn notify_new_comment(
        &self,
        notification: NewCommentNotification,
    ) -> Result<(), CommentNotificationError> {
        let subject = Self::subject(&notification);
        let body = Self::body(&notification);

        self.sender
            .send_email(&notification.recipient_email, &subject, &body)
            .await
            .map_err(CommentNotificationError::EmailSendingFailed)
    }
}
