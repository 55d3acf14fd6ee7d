pub mod image_repository_postgres;
pub mod image_store_gcs;
pub mod listing_query_postgres;
pub mod listing_repository_postgres;
pub mod sea_orm_entity;

pub use image_repository_postgres::ImageRepositoryPostgres;
pub use image_store_gcs::GcsImageStore;
pub use listing_query_postgres::ListingQueryPostgres;
pub use listing_repository_postgres::ListingRepositoryPostgres;
