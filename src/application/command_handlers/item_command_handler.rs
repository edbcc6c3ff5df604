// Item write flows: listing a new item and editing an existing one.
//
// Responsibilities
// - A new item needs an existing owner and, when it answers a request, an existing
//   request.
// - Only the owner edits an item; anyone else is told the item does not exist.

use std::sync::Arc;

use tracing::info;

use crate::application::errors::{AccessDenied, ApplicationError};
use crate::application::views::item_view::ItemView;
use crate::core::item::{ItemId, ItemPatch, NewItem};
use crate::core::ports::EntityStore;
use crate::core::request::RequestId;
use crate::core::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<RequestId>,
}

pub struct ItemCommandHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ItemCommandHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_item(&self, owner_id: UserId, command: AddItem) -> Result<ItemView, ApplicationError> {
        if self.store.find_user(owner_id).await?.is_none() {
            return Err(ApplicationError::user_not_found(owner_id));
        }
        if let Some(request_id) = command.request_id {
            if self.store.find_request(request_id).await?.is_none() {
                return Err(ApplicationError::request_not_found(request_id));
            }
        }

        let item = self
            .store
            .insert_item(NewItem {
                name: command.name,
                description: command.description,
                available: command.available,
                owner_id,
                request_id: command.request_id,
            })
            .await?;
        info!(item_id = item.id, owner_id, "item listed");
        Ok(item.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_item(
        &self,
        user_id: UserId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<ItemView, ApplicationError> {
        let item = self
            .store
            .find_item(item_id)
            .await?
            .ok_or_else(|| ApplicationError::item_not_found(item_id))?;
        if !item.is_owned_by(user_id) {
            return Err(AccessDenied::ItemEditByStranger { item_id, user_id }.into());
        }
        let item = self.store.update_item(item.patched(patch)).await?;
        Ok(item.into())
    }
}
