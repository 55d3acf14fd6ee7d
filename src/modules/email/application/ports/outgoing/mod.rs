pub mod comment_notifier;
pub mod email_sender;

pub use comment_notifier::{CommentNotificationError, CommentNotifier, NewCommentNotification};
pub use email_sender::EmailSender;
