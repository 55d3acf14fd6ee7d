use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    comments::application::ports::incoming::use_cases::GetCommentsError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/listings/{listing_id}/comments")]
pub async fn get_comments_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data.get_comments.execute(listing_id).await {
        Ok(comments) => ApiResponse::success(comments),
        Err(GetCommentsError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
