use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::ListingResult;

//
// ──────────────────────────────────────────────────────────
// Create Listing Command
// ──────────────────────────────────────────────────────────
//

/// Raw image bytes plus the file extension used for the stored object name.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub extension: String,
}

#[derive(Debug, Clone)]
pub struct CreateListingCommand {
    category_id: Uuid,
    author_id: Uuid,
    title: String,
    description: String,
    price: f64,
    contacts: String,
    image: Option<ImagePayload>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateListingCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Contacts cannot be empty")]
    EmptyContacts,

    #[error("Image payload is empty")]
    EmptyImage,
}

impl CreateListingCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_id: Uuid,
        author_id: Uuid,
        title: String,
        description: String,
        price: f64,
        contacts: String,
        image: Option<ImagePayload>,
    ) -> Result<Self, CreateListingCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateListingCommandError::EmptyTitle);
        }

        if title.len() > 40 {
            return Err(CreateListingCommandError::TitleTooLong);
        }

        if !price.is_finite() || price < 0.0 {
            return Err(CreateListingCommandError::InvalidPrice);
        }

        if contacts.trim().is_empty() {
            return Err(CreateListingCommandError::EmptyContacts);
        }

        if let Some(payload) = &image {
            if payload.data.is_empty() {
                return Err(CreateListingCommandError::EmptyImage);
            }
        }

        Ok(Self {
            category_id,
            author_id,
            title: title.to_string(),
            description,
            price,
            contacts: contacts.trim().to_string(),
            image,
        })
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn contacts(&self) -> &str {
        &self.contacts
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateListingError {
    #[error("Category not found")]
    CategoryNotFound,

    /// Listings are filed under sub-categories only.
    #[error("Category is not a sub-category")]
    CategoryNotSubcategory,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateListingUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateListingCommand,
    ) -> Result<ListingResult, CreateListingError>;
}
