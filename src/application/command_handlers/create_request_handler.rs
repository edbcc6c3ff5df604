use std::sync::Arc;

use tracing::info;

use crate::application::errors::ApplicationError;
use crate::application::views::request_view::RequestView;
use crate::core::clock::Clock;
use crate::core::ports::EntityStore;
use crate::core::request::NewItemRequest;
use crate::core::user::UserId;

pub struct CreateRequestHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> CreateRequestHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        requester_id: UserId,
        description: String,
    ) -> Result<RequestView, ApplicationError> {
        if self.store.find_user(requester_id).await?.is_none() {
            return Err(ApplicationError::user_not_found(requester_id));
        }
        let request = self
            .store
            .insert_request(NewItemRequest {
                description,
                requester_id,
                created: self.clock.now(),
            })
            .await?;
        info!(request_id = request.id, requester_id, "item requested");
        Ok(RequestView::new(request, &[]))
    }
}

#[cfg(test)]
mod create_request_handler_tests {
    use super::*;
    use crate::test_support::fixtures::bookings::noon;
    use crate::test_support::fixtures::store::seeded;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_stamp_the_request_with_now() {
        let seeded = seeded().await;
        let handler = CreateRequestHandler::new(seeded.store.clone(), seeded.clock.clone());

        let view = handler
            .handle(seeded.booker.id, "Need a tent".into())
            .await
            .unwrap();

        assert_eq!(view.created, noon());
        assert_eq!(view.description, "Need a tent");
        assert!(view.items.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_an_existing_requester() {
        let seeded = seeded().await;
        let handler = CreateRequestHandler::new(seeded.store.clone(), seeded.clock.clone());

        assert_eq!(
            handler.handle(999, "Need a tent".into()).await,
            Err(ApplicationError::user_not_found(999))
        );
    }
}
