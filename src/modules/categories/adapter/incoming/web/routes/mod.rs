mod create_category;
mod delete_category;
mod get_categories;

pub use create_category::create_category_handler;
pub use delete_category::delete_category_handler;
pub use get_categories::get_categories_handler;
