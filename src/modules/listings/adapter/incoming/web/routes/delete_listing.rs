use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    listings::application::ports::incoming::use_cases::DeleteListingError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/listings/{listing_id}")]
pub async fn delete_listing_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data.delete_listing.execute(listing_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteListingError::ListingNotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }
        Err(DeleteListingError::StorageError(_) | DeleteListingError::RepositoryError(_)) => {
            ApiResponse::internal_error()
        }
    }
}
