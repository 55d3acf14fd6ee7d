use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::ListingImageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listing_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub listing_id: Uuid,

    /// Blob-store reference.
    pub image: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ListingImageRecord {
        ListingImageRecord {
            id: self.id,
            listing_id: self.listing_id,
            image: self.image.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listings::Entity",
        from = "Column::ListingId",
        to = "super::listings::Column::Id"
    )]
    Listing,
}

impl Related<super::listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
