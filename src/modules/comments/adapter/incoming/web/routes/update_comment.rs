use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    comments::application::ports::incoming::use_cases::{
        UpdateCommentCommand, UpdateCommentCommandError, UpdateCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateCommentRequest {
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

#[patch("/api/comments/{comment_id}")]
pub async fn update_comment_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCommentRequest>,
) -> impl Responder {
    let comment_id = path.into_inner();

    let command = match UpdateCommentCommand::new(
        comment_id,
        payload.content.clone(),
        payload.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(UpdateCommentCommandError::EmptyContent) => {
            return ApiResponse::bad_request("EMPTY_CONTENT", "Comment cannot be empty")
        }
        Err(UpdateCommentCommandError::NoChanges) => {
            return ApiResponse::bad_request("NO_CHANGES", "Nothing to update")
        }
    };

    match data.update_comment.execute(command).await {
        Ok(comment) => ApiResponse::success(comment),
        Err(UpdateCommentError::CommentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(UpdateCommentError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
