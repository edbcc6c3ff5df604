use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::views::user_view::UserView;
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

pub struct UserQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UserQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: UserId) -> Result<UserView, ApplicationError> {
        self.store
            .find_user(id)
            .await?
            .map(UserView::from)
            .ok_or_else(|| ApplicationError::user_not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<UserView>, ApplicationError> {
        let users = self.store.list_users().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}
