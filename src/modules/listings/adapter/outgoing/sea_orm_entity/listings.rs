use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::{ListingResult, ListingView};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub category_id: Uuid,

    pub author_id: Uuid,

    pub title: String,

    pub description: String,

    pub price: f64,

    pub contacts: String,

    /// Blob-store reference of the primary image.
    pub image: Option<String>,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> ListingResult {
        ListingResult {
            id: self.id,
            category_id: self.category_id,
            author_id: self.author_id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            contacts: self.contacts.clone(),
            image: self.image.clone(),
            is_active: self.is_active,
            created_at: self.created_at.into(),
        }
    }

    pub fn to_view(&self) -> ListingView {
        ListingView {
            id: self.id,
            category_id: self.category_id,
            author_id: self.author_id,
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::categories::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::categories::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,

    #[sea_orm(
        belongs_to = "crate::modules::users::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AuthorId",
        to = "crate::modules::users::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Author,

    #[sea_orm(has_many = "super::listing_images::Entity")]
    Images,
}

impl ActiveModelBehavior for ActiveModel {}
