pub mod backend;
pub mod json_file;
pub mod sqlite;

pub use backend::{ItemStore, StoreError};
pub use json_file::JsonFileStore;
pub use sqlite::SqliteItemStore;

use crate::config::{Config, StorageType};
use std::sync::Arc;

/// Factory function to create the item store selected by configuration
pub async fn create_item_store(config: &Config) -> anyhow::Result<Arc<dyn ItemStore>> {
    match config.storage_type {
        StorageType::Json => {
            tracing::info!("Using JSON item file {}", config.items_json_path);
            Ok(Arc::new(JsonFileStore::new(&config.items_json_path)))
        }
        StorageType::Sqlite => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set for sqlite storage"))?;
            tracing::info!("Using SQLite database {}", database_url);
            let store =
                SqliteItemStore::connect(database_url, config.db_schema_path.as_deref()).await?;
            Ok(Arc::new(store))
        }
    }
}
