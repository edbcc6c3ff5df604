// Read side of item requests: the caller's own, everyone else's, and one by id.
// Each request comes back with the items listed in answer to it.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::views::request_view::RequestView;
use crate::core::pagination::PageRequest;
use crate::core::ports::EntityStore;
use crate::core::request::{ItemRequest, RequestId};
use crate::core::user::UserId;

pub struct RequestQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RequestQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn own(&self, user_id: UserId) -> Result<Vec<RequestView>, ApplicationError> {
        self.ensure_user(user_id).await?;
        let requests = self.store.find_requests_by_requester(user_id).await?;
        self.with_items(requests).await
    }

    pub async fn others(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Vec<RequestView>, ApplicationError> {
        self.ensure_user(user_id).await?;
        let requests = self.store.find_requests_excluding(user_id, page).await?;
        self.with_items(requests).await
    }

    pub async fn get(
        &self,
        user_id: UserId,
        request_id: RequestId,
    ) -> Result<RequestView, ApplicationError> {
        self.ensure_user(user_id).await?;
        let request = self
            .store
            .find_request(request_id)
            .await?
            .ok_or_else(|| ApplicationError::request_not_found(request_id))?;
        let items = self.store.find_items_by_requests(&[request_id]).await?;
        Ok(RequestView::new(request, &items))
    }

    async fn ensure_user(&self, user_id: UserId) -> Result<(), ApplicationError> {
        match self.store.find_user(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::user_not_found(user_id)),
        }
    }

    async fn with_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<RequestView>, ApplicationError> {
        let ids: Vec<RequestId> = requests.iter().map(|r| r.id).collect();
        let items = self.store.find_items_by_requests(&ids).await?;
        Ok(requests
            .into_iter()
            .map(|request| RequestView::new(request, &items))
            .collect())
    }
}
