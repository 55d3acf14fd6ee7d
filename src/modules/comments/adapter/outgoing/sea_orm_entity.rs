use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::comments::application::ports::outgoing::CommentResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub listing_id: Uuid,

    pub author_name: String,

    pub content: String,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> CommentResult {
        CommentResult {
            id: self.id,
            listing_id: self.listing_id,
            author_name: self.author_name.clone(),
            content: self.content.clone(),
            is_active: self.is_active,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::listings::adapter::outgoing::sea_orm_entity::listings::Entity",
        from = "Column::ListingId",
        to = "crate::modules::listings::adapter::outgoing::sea_orm_entity::listings::Column::Id"
    )]
    Listing,
}

impl ActiveModelBehavior for ActiveModel {}
