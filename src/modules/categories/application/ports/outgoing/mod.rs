pub mod category_query;
pub mod category_repository;

pub use category_query::{CategoryQuery, CategoryQueryError};
pub use category_repository::{
    CategoryRecord, CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};
