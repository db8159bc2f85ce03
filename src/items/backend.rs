use crate::models::{Item, NewItem};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed item file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Item {0} already exists")]
    DuplicateId(i64),
    #[error("No item id left to assign")]
    IdsExhausted,
}

/// Trait defining the interface for item persistence
///
/// Implementations own the persisted records; handlers only go through
/// these four operations.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Append a new item and return it as stored
    async fn add_item(&self, item: NewItem) -> Result<Item, StoreError>;

    /// All items in storage order
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    /// The item with the given id, or None if absent
    async fn get_item(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Items whose name contains `keyword` (case-sensitive). An empty keyword matches all.
    async fn search_items(&self, keyword: &str) -> Result<Vec<Item>, StoreError>;
}
