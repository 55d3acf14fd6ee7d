use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    listings::application::ports::incoming::use_cases::GetSingleListingError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/listings/{listing_id}")]
pub async fn get_single_listing_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data.get_single_listing.execute(listing_id).await {
        Ok(details) => ApiResponse::success(details),
        Err(GetSingleListingError::ListingNotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }
        Err(
            GetSingleListingError::RepositoryError(_) | GetSingleListingError::StorageError(_),
        ) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::listings::application::ports::incoming::use_cases::{
        GetSingleListingUseCase, ListingDetails, ListingImageView,
    };
    use crate::listings::application::ports::outgoing::ListingResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetSingleListingUseCase {
        result: Result<ListingDetails, GetSingleListingError>,
    }

    #[async_trait]
    impl GetSingleListingUseCase for MockGetSingleListingUseCase {
        async fn execute(
            &self,
            _listing_id: Uuid,
        ) -> Result<ListingDetails, GetSingleListingError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn returns_details_with_image_urls() {
        let listing = ListingResult {
            id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "Mountain bike".to_string(),
            description: "Barely used".to_string(),
            price: 250.0,
            contacts: "call".to_string(),
            image: Some("listings/primary.jpg".to_string()),
            is_active: true,
            created_at: Utc::now(),
        };

        let details = ListingDetails {
            listing: listing.clone(),
            primary_image_url: Some("https://signed.example/primary".to_string()),
            images: vec![ListingImageView {
                id: Uuid::new_v4(),
                url: "https://signed.example/extra".to_string(),
            }],
        };

        let state = TestAppStateBuilder::default()
            .with_get_single_listing(MockGetSingleListingUseCase {
                result: Ok(details),
            })
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(get_single_listing_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/listings/{}", listing.id))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(
            json["data"]["primary_image_url"],
            "https://signed.example/primary"
        );
        assert_eq!(json["data"]["images"][0]["url"], "https://signed.example/extra");
    }

    #[actix_web::test]
    async fn missing_listing_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_single_listing(MockGetSingleListingUseCase {
                result: Err(GetSingleListingError::ListingNotFound),
            })
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(get_single_listing_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/listings/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
