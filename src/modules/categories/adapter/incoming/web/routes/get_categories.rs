use actix_web::{get, web, Responder};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    categories::application::domain::entities::{Subcategory, TopLevelCategory},
    categories::application::ports::incoming::use_cases::GetCategoriesError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct TopLevelCategoryDto {
    id: Uuid,
    name: String,
    display_order: i16,
}

#[derive(Debug, Serialize)]
struct SubcategoryDto {
    id: Uuid,
    name: String,
    display_name: String,
    display_order: i16,
    parent_id: Uuid,
}

#[derive(Debug, Serialize)]
struct CategoryBoardResponse {
    top_level: Vec<TopLevelCategoryDto>,
    subcategories: Vec<SubcategoryDto>,
}

impl From<TopLevelCategory> for TopLevelCategoryDto {
    fn from(c: TopLevelCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            display_order: c.display_order,
        }
    }
}

impl From<Subcategory> for SubcategoryDto {
    fn from(s: Subcategory) -> Self {
        let display_name = s.display_name();
        Self {
            id: s.id,
            name: s.name,
            display_name,
            display_order: s.display_order,
            parent_id: s.parent.id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    let top_level = match data.get_top_level_categories.execute().await {
        Ok(categories) => categories,
        Err(err) => return map_get_categories_error(err),
    };

    let subcategories = match data.get_subcategories.execute().await {
        Ok(subcategories) => subcategories,
        Err(err) => return map_get_categories_error(err),
    };

    ApiResponse::success(CategoryBoardResponse {
        top_level: top_level.into_iter().map(Into::into).collect(),
        subcategories: subcategories.into_iter().map(Into::into).collect(),
    })
}

fn map_get_categories_error(err: GetCategoriesError) -> actix_web::HttpResponse {
    match err {
        GetCategoriesError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
