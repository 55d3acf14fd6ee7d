use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub is_activated: bool,
    pub send_messages: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_activated: bool,
    /// Email the author about new comments on their listings?
    pub send_messages: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn find_user_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserResult>, UserRepositoryError>;

    /// Deletes exactly the user row; owned listings are walked by the
    /// deletion use case before this is called.
    async fn delete_user_row(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
