use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    categories::application::ports::incoming::use_cases::DeleteCategoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/categories/{category_id}")]
pub async fn delete_category_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.delete_category.execute(category_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_category_error(err),
    }
}

fn map_delete_category_error(err: DeleteCategoryError) -> actix_web::HttpResponse {
    match err {
        DeleteCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        DeleteCategoryError::CategoryInUse => ApiResponse::conflict(
            "CATEGORY_IN_USE",
            "Category is still referenced by sub-categories or listings",
        ),
        DeleteCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
