use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    comments::application::ports::incoming::use_cases::{
        CreateCommentCommand, CreateCommentCommandError, CreateCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateCommentRequest {
    pub author_name: String,
    pub content: String,
}

#[post("/api/listings/{listing_id}/comments")]
pub async fn create_comment_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateCommentRequest>,
) -> impl Responder {
    let listing_id = path.into_inner();

    let command = match CreateCommentCommand::new(
        listing_id,
        payload.author_name.clone(),
        payload.content.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_comment.execute(command).await {
        Ok(comment) => ApiResponse::created(comment),
        Err(CreateCommentError::ListingNotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }
        Err(CreateCommentError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: CreateCommentCommandError) -> actix_web::HttpResponse {
    match err {
        CreateCommentCommandError::EmptyAuthorName => {
            ApiResponse::bad_request("EMPTY_AUTHOR_NAME", "Author name cannot be empty")
        }
        CreateCommentCommandError::AuthorNameTooLong => ApiResponse::bad_request(
            "AUTHOR_NAME_TOO_LONG",
            "Author name must not exceed 30 characters",
        ),
        CreateCommentCommandError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "Comment cannot be empty")
        }
    }
}
