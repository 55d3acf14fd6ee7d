use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::categories::application::domain::entities::{Subcategory, TopLevelCategory};
use crate::categories::application::ports::outgoing::CategoryRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub display_order: i16,

    pub parent_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            id: self.id,
            name: self.name.clone(),
            display_order: self.display_order,
            parent_id: self.parent_id,
        }
    }

    pub fn to_top_level(&self) -> TopLevelCategory {
        TopLevelCategory {
            id: self.id,
            name: self.name.clone(),
            display_order: self.display_order,
        }
    }

    pub fn to_subcategory(&self, parent: &Model) -> Subcategory {
        Subcategory {
            id: self.id,
            name: self.name.clone(),
            display_order: self.display_order,
            parent: parent.to_top_level(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}
