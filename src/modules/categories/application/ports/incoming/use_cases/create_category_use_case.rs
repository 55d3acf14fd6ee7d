use async_trait::async_trait;
use uuid::Uuid;

use crate::categories::application::ports::outgoing::CategoryRecord;

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    display_order: i16,
    parent_id: Option<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,
}

impl CreateCategoryCommand {
    pub fn new(
        name: String,
        display_order: i16,
        parent_id: Option<Uuid>,
    ) -> Result<Self, CreateCategoryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }

        if name.len() > 30 {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            display_order,
            parent_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_order(&self) -> i16 {
        self.display_order
    }

    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Category name already taken")]
    NameTaken,

    #[error("Parent category not found")]
    ParentNotFound,

    #[error("Parent category is not top-level")]
    ParentNotTopLevel,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryRecord, CreateCategoryError>;
}
