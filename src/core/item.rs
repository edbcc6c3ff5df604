use crate::core::request::RequestId;
use crate::core::user::UserId;

pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl Item {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    pub fn patched(mut self, patch: ItemPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        self
    }

    /// Case-insensitive match on name or description. Unavailable items never match.
    pub fn matches_search(&self, text: &str) -> bool {
        if !self.available || text.is_empty() {
            return false;
        }
        let needle = text.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
