use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub image_name: String,
}

/// An item as submitted by a client, before the store has assigned anything
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub image_name: String,
}

impl NewItem {
    pub fn into_item(self, id: Option<i64>) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            image_name: self.image_name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}
