pub mod image_repository;
pub mod image_store;
pub mod listing_query;
pub mod listing_repository;

pub use image_repository::{ImageRepository, ImageRepositoryError, ListingImageRecord};
pub use image_store::{timestamp_object_name, ImageStore, ImageStoreError};
pub use listing_query::{ListingQuery, ListingQueryError, ListingView};
pub use listing_repository::{
    CreateListingData, ListingRepository, ListingRepositoryError, ListingResult,
};
