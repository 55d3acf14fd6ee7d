mod create_comment;
mod get_comments;
mod update_comment;

pub use create_comment::create_comment_handler;
pub use get_comments::get_comments_handler;
pub use update_comment::update_comment_handler;
