use super::backend::{validate_image_name, ImageBackend, ImageError, StoredImage, DEFAULT_IMAGE};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct LocalImageStorage {
    image_dir: PathBuf,
}

impl LocalImageStorage {
    pub fn new(config: &Config) -> Self {
        LocalImageStorage::with_dir(&config.image_dir)
    }

    pub fn with_dir(image_dir: impl Into<PathBuf>) -> Self {
        LocalImageStorage {
            image_dir: image_dir.into(),
        }
    }

    async fn read(&self, file_name: &str) -> Result<Option<Vec<u8>>, ImageError> {
        let path = self.image_dir.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ImageError::Io { path, source }),
        }
    }
}

#[async_trait]
impl ImageBackend for LocalImageStorage {
    async fn store_image(&self, bytes: &[u8]) -> Result<String> {
        // Create directory if it doesn't exist
        tokio::fs::create_dir_all(&self.image_dir)
            .await
            .with_context(|| format!("Failed to create {}", self.image_dir.display()))?;

        let file_name = self.image_name(bytes);
        let file_path = self.image_dir.join(&file_name);

        // Same content always maps to the same name, so overwriting is harmless
        tokio::fs::write(&file_path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", file_path.display()))?;

        Ok(file_name)
    }

    async fn fetch_image(&self, file_name: &str) -> Result<StoredImage, ImageError> {
        validate_image_name(file_name)?;

        if let Some(bytes) = self.read(file_name).await? {
            return Ok(StoredImage {
                file_name: file_name.to_string(),
                bytes,
            });
        }

        tracing::debug!("Image not found: {}, serving {}", file_name, DEFAULT_IMAGE);
        match self.read(DEFAULT_IMAGE).await? {
            Some(bytes) => Ok(StoredImage {
                file_name: DEFAULT_IMAGE.to_string(),
                bytes,
            }),
            None => Err(ImageError::NotFound(file_name.to_string())),
        }
    }
}
