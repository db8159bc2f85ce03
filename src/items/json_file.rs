use super::backend::{ItemStore, StoreError};
use crate::models::{Item, ItemsResponse, NewItem};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Items kept as `{"items": [...]}` in a single JSON file.
///
/// Every add rewrites the whole file. The lock is held across the
/// read-modify-write cycle and the new content is renamed over the old file,
/// so concurrent adds are serialized and a reader never sees a partial write.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_items(&self) -> Result<Vec<Item>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let file: ItemsResponse =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.items)
    }

    async fn write_items(&self, items: Vec<Item>) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let body = serde_json::to_vec_pretty(&ItemsResponse { items }).map_err(|source| {
            StoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    async fn add_item(&self, item: NewItem) -> Result<Item, StoreError> {
        let _guard = self.lock.lock().await;

        let mut items = self.read_items().await?;
        let id = match item.id {
            Some(id) if items.iter().any(|i| i.id == Some(id)) => {
                return Err(StoreError::DuplicateId(id));
            }
            Some(id) => id,
            None => items
                .iter()
                .filter_map(|i| i.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted)?,
        };

        let item = item.into_item(Some(id));
        items.push(item.clone());
        self.write_items(items).await?;

        tracing::debug!("Appended item {} to {}", id, self.path.display());
        Ok(item)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_items().await
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_items()
            .await?
            .into_iter()
            .find(|item| item.id == Some(id)))
    }

    async fn search_items(&self, keyword: &str) -> Result<Vec<Item>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_items()
            .await?
            .into_iter()
            .filter(|item| item.name.contains(keyword))
            .collect())
    }
}
