mod add_listing_image_service;
mod create_listing_service;
mod delete_listing_service;
mod get_listings_service;
mod get_single_listing_service;

pub use add_listing_image_service::AddListingImageService;
pub use create_listing_service::CreateListingService;
pub use delete_listing_service::DeleteListingService;
pub use get_listings_service::GetListingsService;
pub use get_single_listing_service::GetSingleListingService;
