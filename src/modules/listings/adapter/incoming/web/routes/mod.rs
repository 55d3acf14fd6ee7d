mod add_listing_image;
pub mod create_listing;
mod delete_listing;
mod get_listings;
mod get_single_listing;

pub use add_listing_image::add_listing_image_handler;
pub use create_listing::{create_listing_handler, CreateListingRequest, ImagePayloadDto};
pub use delete_listing::delete_listing_handler;
pub use get_listings::get_listings_handler;
pub use get_single_listing::get_single_listing_handler;
