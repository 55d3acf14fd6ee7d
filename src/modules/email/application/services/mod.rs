pub mod comment_email_service;

pub use comment_email_service::CommentEmailService;
