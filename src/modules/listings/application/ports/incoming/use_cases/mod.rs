mod add_listing_image_use_case;
mod create_listing_use_case;
mod delete_listing_use_case;
mod get_listings_use_case;
mod get_single_listing_use_case;

pub use add_listing_image_use_case::{AddListingImageError, AddListingImageUseCase};
pub use create_listing_use_case::{
    CreateListingCommand, CreateListingCommandError, CreateListingError, CreateListingUseCase,
    ImagePayload,
};
pub use delete_listing_use_case::{DeleteListingError, DeleteListingUseCase};
pub use get_listings_use_case::{GetListingsError, GetListingsUseCase};
pub use get_single_listing_use_case::{
    GetSingleListingError, GetSingleListingUseCase, ListingDetails, ListingImageView,
};
