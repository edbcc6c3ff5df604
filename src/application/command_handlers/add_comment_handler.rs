// Comment handler: a past renter leaves a note on an item.
//
// Responsibilities
// - Refuse authors without a finished, accepted booking of the item.
// - Stamp the comment with the same instant the eligibility check used.

use std::sync::Arc;

use tracing::info;

use crate::application::errors::ApplicationError;
use crate::application::query_handlers::booking_summary_projector::BookingSummaryProjector;
use crate::application::views::item_view::CommentView;
use crate::core::clock::Clock;
use crate::core::comment::NewComment;
use crate::core::item::ItemId;
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

pub struct AddCommentHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    projector: BookingSummaryProjector<TStore>,
}

impl<TStore> AddCommentHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            projector: BookingSummaryProjector::new(store.clone()),
            store,
            clock,
        }
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn handle(
        &self,
        author_id: UserId,
        item_id: ItemId,
        text: String,
    ) -> Result<CommentView, ApplicationError> {
        let now = self.clock.now();
        if !self.projector.comment_eligible(item_id, author_id, now).await? {
            return Err(ApplicationError::BadRequest(format!(
                "user {author_id} has no finished booking of item {item_id}"
            )));
        }
        let author = self
            .store
            .find_user(author_id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(author_id))?;

        let comment = self
            .store
            .insert_comment(NewComment {
                text,
                item_id,
                author_id,
                created: now,
            })
            .await?;
        info!(comment_id = comment.id, item_id, author_id, "comment added");
        Ok(CommentView::new(comment, author.name))
    }
}

#[cfg(test)]
mod add_comment_handler_tests {
    use super::*;
    use crate::core::booking::status::BookingStatus;
    use crate::core::ports::CommentStore;
    use crate::test_support::fixtures::bookings::{hours_from_noon, noon};
    use crate::test_support::fixtures::store::{add_booking, seeded};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_a_comment_after_the_rental_ended() {
        let seeded = seeded().await;
        add_booking(
            &seeded.store,
            &seeded.item,
            &seeded.booker,
            (-5, -1),
            BookingStatus::Approved,
        )
        .await;
        let handler = AddCommentHandler::new(seeded.store.clone(), seeded.clock.clone());

        let view = handler
            .handle(seeded.booker.id, seeded.item.id, "Solid drill".into())
            .await
            .unwrap();

        assert_eq!(view.author_name, "Booker");
        assert_eq!(view.created, noon());
        let stored = seeded
            .store
            .find_comments_by_items(&[seeded.item.id])
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_while_the_rental_is_still_running() {
        let seeded = seeded().await;
        add_booking(
            &seeded.store,
            &seeded.item,
            &seeded.booker,
            (-1, 3),
            BookingStatus::Approved,
        )
        .await;
        let handler = AddCommentHandler::new(seeded.store.clone(), seeded.clock.clone());

        let early = handler
            .handle(seeded.booker.id, seeded.item.id, "Too soon".into())
            .await;
        assert!(matches!(early, Err(ApplicationError::BadRequest(_))));

        seeded.clock.set(hours_from_noon(4));
        let later = handler
            .handle(seeded.booker.id, seeded.item.id, "Now it counts".into())
            .await
            .unwrap();
        assert_eq!(later.created, hours_from_noon(4));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_users_who_never_rented_the_item() {
        let seeded = seeded().await;
        let handler = AddCommentHandler::new(seeded.store.clone(), seeded.clock.clone());

        let result = handler
            .handle(seeded.stranger.id, seeded.item.id, "Looks nice".into())
            .await;

        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
    }
}
