use std::sync::Arc;

use tracing::info;

use crate::application::errors::ApplicationError;
use crate::application::views::user_view::UserView;
use crate::core::ports::EntityStore;
use crate::core::user::{NewUser, UserId, UserPatch};

pub struct UserCommandHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UserCommandHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, user: NewUser) -> Result<UserView, ApplicationError> {
        let user = self.store.insert_user(user).await?;
        info!(user_id = user.id, "user registered");
        Ok(user.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: UserId, patch: UserPatch) -> Result<UserView, ApplicationError> {
        let user = self
            .store
            .find_user(id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(id))?;
        let user = self.store.update_user(user.patched(patch)).await?;
        Ok(user.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), ApplicationError> {
        if !self.store.delete_user(id).await? {
            return Err(ApplicationError::user_not_found(id));
        }
        info!(user_id = id, "user deleted");
        Ok(())
    }
}
