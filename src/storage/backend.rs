use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Extension every stored image carries
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Served when a well-formed image name has no file behind it
pub const DEFAULT_IMAGE: &str = "default.jpg";

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image path does not end with .jpg")]
    InvalidExtension(String),
    #[error("Invalid image name: {0}")]
    InvalidName(String),
    #[error("Image not found: {0}")]
    NotFound(String),
    #[error("Failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An image read back from the store
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Name of the file actually served (the default image on fallback)
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Trait defining the interface for image storage backends
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Store image bytes under their content-derived name and return that name
    async fn store_image(&self, bytes: &[u8]) -> Result<String>;

    /// Read an image by file name, substituting the default image when absent
    async fn fetch_image(&self, file_name: &str) -> Result<StoredImage, ImageError>;

    /// Calculate SHA256 hash of file bytes
    fn calculate_hash(&self, bytes: &[u8]) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    fn image_name(&self, bytes: &[u8]) -> String {
        format!("{}{}", self.calculate_hash(bytes), IMAGE_EXTENSION)
    }
}

/// Syntactic check on a requested image name. Existence is not considered.
pub fn validate_image_name(file_name: &str) -> Result<(), ImageError> {
    if !file_name.ends_with(IMAGE_EXTENSION) {
        return Err(ImageError::InvalidExtension(file_name.to_string()));
    }
    // path segments would let a request escape the image directory
    if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
        return Err(ImageError::InvalidName(file_name.to_string()));
    }
    Ok(())
}
