use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::users::application::ports::outgoing::UserResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub username: String,

    pub email: String,

    pub is_activated: bool,

    /// Email the author about new comments on their listings?
    pub send_messages: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> UserResult {
        UserResult {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            is_activated: self.is_activated,
            send_messages: self.send_messages,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
