mod create_comment_use_case;
mod get_comments_use_case;
mod update_comment_use_case;

pub use create_comment_use_case::{
    CreateCommentCommand, CreateCommentCommandError, CreateCommentError, CreateCommentUseCase,
};
pub use get_comments_use_case::{GetCommentsError, GetCommentsUseCase};
pub use update_comment_use_case::{
    UpdateCommentCommand, UpdateCommentCommandError, UpdateCommentError, UpdateCommentUseCase,
};
