use async_trait::async_trait;
use std::sync::Arc;

use crate::comments::application::ports::{
    incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
    outgoing::{CommentRepository, CommentResult, CreateCommentData},
};
use crate::email::application::ports::outgoing::{CommentNotifier, NewCommentNotification};
use crate::listings::application::ports::outgoing::ListingRepository;
use crate::users::application::ports::outgoing::UserRepository;

/// Persists a comment, then — for newly created records only — tells the
/// listing author about it. The notifier is an explicit constructor
/// dependency; there is no global signal registry.
pub struct CreateCommentService<C, L, U>
where
    C: CommentRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    comment_repository: C,
    listing_repository: L,
    user_repository: U,
    notifier: Arc<dyn CommentNotifier + Send + Sync>,
}

impl<C, L, U> CreateCommentService<C, L, U>
where
    C: CommentRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn new(
        comment_repository: C,
        listing_repository: L,
        user_repository: U,
        notifier: Arc<dyn CommentNotifier + Send + Sync>,
    ) -> Self {
        Self {
            comment_repository,
            listing_repository,
            user_repository,
            notifier,
        }
    }

    /// Post-persist hook. Best-effort: a failed notification never undoes
    /// the comment write, and nothing here is retried.
    async fn dispatch_notification(&self, comment: &CommentResult, listing_title: &str, author_id: uuid::Uuid) {
        let author = match self.user_repository.find_user_by_id(author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::warn!(
                    comment_id = %comment.id,
                    author_id = %author_id,
                    "Listing author vanished before notification"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(
                    comment_id = %comment.id,
                    error = %e,
                    "Could not load the listing author for notification"
                );
                return;
            }
        };

        if !author.send_messages {
            return;
        }

        let notification = NewCommentNotification {
            comment_id: comment.id,
            listing_title: listing_title.to_string(),
            recipient_username: author.username,
            recipient_email: author.email,
            comment_author: comment.author_name.clone(),
            comment_content: comment.content.clone(),
        };

        if let Err(e) = self.notifier.notify_new_comment(notification).await {
            tracing::warn!(
                comment_id = %comment.id,
                error = %e,
                "New-comment notification failed"
            );
        }
    }
}

#[async_trait]
impl<C, L, U> CreateCommentUseCase for CreateCommentService<C, L, U>
where
    C: CommentRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        let listing = self
            .listing_repository
            .find_listing_by_id(command.listing_id())
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::ListingNotFound)?;

        let data = CreateCommentData {
            listing_id: listing.id,
            author_name: command.author_name().to_string(),
            content: command.content().to_string(),
        };

        let comment = self
            .comment_repository
            .create_comment(data)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?;

        self.dispatch_notification(&comment, &listing.title, listing.author_id)
            .await;

        Ok(comment)
    }
}
