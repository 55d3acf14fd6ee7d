mod create_category_use_case;
mod delete_category_use_case;
mod get_categories_use_case;

pub use create_category_use_case::{
    CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError, CreateCategoryUseCase,
};
pub use delete_category_use_case::{DeleteCategoryError, DeleteCategoryUseCase};
pub use get_categories_use_case::{
    GetCategoriesError, GetSubcategoriesUseCase, GetTopLevelCategoriesUseCase,
};
