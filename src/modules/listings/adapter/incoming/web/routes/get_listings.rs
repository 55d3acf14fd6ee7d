use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    listings::application::ports::incoming::use_cases::GetListingsError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
struct ListingFilter {
    category_id: Option<Uuid>,
}

#[get("/api/listings")]
pub async fn get_listings_handler(
    data: web::Data<AppState>,
    filter: web::Query<ListingFilter>,
) -> impl Responder {
    match data.get_listings.execute(filter.category_id).await {
        Ok(listings) => ApiResponse::success(listings),
        Err(GetListingsError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
