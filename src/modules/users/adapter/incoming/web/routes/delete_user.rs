use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse, users::application::ports::incoming::use_cases::DeleteUserError,
    AppState,
};

#[delete("/api/users/{user_id}")]
pub async fn delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.delete_user.execute(user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::ListingDeletionFailed(msg)) => {
            error!(user_id = %user_id, error = %msg, "Aborted user deletion");
            ApiResponse::internal_error()
        }
        Err(DeleteUserError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
