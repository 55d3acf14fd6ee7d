use async_trait::async_trait;
use chrono::Utc;

use crate::categories::application::ports::outgoing::CategoryRepository;
use crate::listings::application::ports::{
    incoming::use_cases::{CreateListingCommand, CreateListingError, CreateListingUseCase},
    outgoing::{timestamp_object_name, CreateListingData, ImageStore, ListingRepository,
        ListingResult},
};
use crate::users::application::ports::outgoing::UserRepository;

pub struct CreateListingService<L, C, U, S>
where
    L: ListingRepository + Send + Sync,
    C: CategoryRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    listing_repository: L,
    category_repository: C,
    user_repository: U,
    image_store: S,
}

impl<L, C, U, S> CreateListingService<L, C, U, S>
where
    L: ListingRepository + Send + Sync,
    C: CategoryRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(
        listing_repository: L,
        category_repository: C,
        user_repository: U,
        image_store: S,
    ) -> Self {
        Self {
            listing_repository,
            category_repository,
            user_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<L, C, U, S> CreateListingUseCase for CreateListingService<L, C, U, S>
where
    L: ListingRepository + Send + Sync,
    C: CategoryRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateListingCommand,
    ) -> Result<ListingResult, CreateListingError> {
        let category = self
            .category_repository
            .find_category_by_id(command.category_id())
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::CategoryNotFound)?;

        // Listings hang off the sub level of the category tree only.
        if category.parent_id.is_none() {
            return Err(CreateListingError::CategoryNotSubcategory);
        }

        self.user_repository
            .find_user_by_id(command.author_id())
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::AuthorNotFound)?;

        // The blob goes in first so the row never points at nothing.
        let mut image_reference = None;
        if let Some(payload) = command.image() {
            let object_name = timestamp_object_name(Utc::now(), &payload.extension);
            let reference = self
                .image_store
                .store(&object_name, payload.data.clone())
                .await
                .map_err(|e| CreateListingError::StorageError(e.to_string()))?;
            image_reference = Some(reference);
        }

        let data = CreateListingData {
            category_id: command.category_id(),
            author_id: command.author_id(),
            title: command.title().to_string(),
            description: command.description().to_string(),
            price: command.price(),
            contacts: command.contacts().to_string(),
            image: image_reference.clone(),
        };

        match self.listing_repository.create_listing(data).await {
            Ok(listing) => Ok(listing),
            Err(e) => {
                if let Some(reference) = image_reference {
                    if let Err(cleanup) = self.image_store.delete(&reference).await {
                        tracing::warn!(
                            reference = %reference,
                            error = %cleanup,
                            "Failed to release stored image after a failed insert"
                        );
                    }
                }
                Err(CreateListingError::RepositoryError(e.to_string()))
            }
        }
    }
}
