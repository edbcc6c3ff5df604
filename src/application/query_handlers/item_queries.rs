// Read side of items: a single item, an owner's catalogue, and search.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::query_handlers::booking_summary_projector::BookingSummaryProjector;
use crate::application::views::item_view::{CommentView, ItemView};
use crate::core::clock::Clock;
use crate::core::item::ItemId;
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

pub struct ItemQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    projector: BookingSummaryProjector<TStore>,
}

impl<TStore> ItemQueryHandler<TStore>
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

    /// The item with its comments; the owner also sees last and next booking.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(
        &self,
        viewer_id: UserId,
        item_id: ItemId,
    ) -> Result<ItemView, ApplicationError> {
        let item = self
            .store
            .find_item(item_id)
            .await?
            .ok_or_else(|| ApplicationError::item_not_found(item_id))?;
        let now = self.clock.now();
        let summary = self.projector.project(&item, viewer_id, now).await?;
        let mut comments = self.comments(&[item.id]).await?;
        let comments = comments.remove(&item.id).unwrap_or_default();
        Ok(ItemView::new(item, &summary, comments))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_owner_items(&self, owner_id: UserId) -> Result<Vec<ItemView>, ApplicationError> {
        let items = self.store.find_items_by_owner(owner_id).await?;
        let now = self.clock.now();
        let mut summaries = self.projector.project_all(&items, owner_id, now).await?;
        let item_ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        let mut comments = self.comments(&item_ids).await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let summary = summaries.remove(&item.id).unwrap_or_default();
                let comments = comments.remove(&item.id).unwrap_or_default();
                ItemView::new(item, &summary, comments)
            })
            .collect())
    }

    /// Available items whose name or description contains `text`. Blank text finds nothing.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Result<Vec<ItemView>, ApplicationError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items = self.store.search_available_items(text).await?;
        Ok(items.into_iter().map(ItemView::from).collect())
    }

    async fn comments(
        &self,
        item_ids: &[ItemId],
    ) -> Result<HashMap<ItemId, Vec<CommentView>>, ApplicationError> {
        let mut authors: HashMap<UserId, String> = HashMap::new();
        let mut by_item: HashMap<ItemId, Vec<CommentView>> = HashMap::new();
        for comment in self.store.find_comments_by_items(item_ids).await? {
            if !authors.contains_key(&comment.author_id) {
                let name = self
                    .store
                    .find_user(comment.author_id)
                    .await?
                    .map(|user| user.name)
                    .ok_or_else(|| ApplicationError::user_not_found(comment.author_id))?;
                authors.insert(comment.author_id, name);
            }
            let author_name = authors.get(&comment.author_id).cloned().unwrap_or_default();
            by_item
                .entry(comment.item_id)
                .or_default()
                .push(CommentView::new(comment, author_name));
        }
        Ok(by_item)
    }
}
