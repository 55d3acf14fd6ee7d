pub mod entities;

pub use entities::{sort_subcategories, sort_top_level, Subcategory, TopLevelCategory};
