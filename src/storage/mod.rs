pub mod backend;
pub mod local;

pub use backend::{ImageBackend, ImageError};
pub use local::LocalImageStorage;

use crate::config::Config;
use std::sync::Arc;

/// Factory function to create the image storage backend
pub fn create_image_storage(config: &Config) -> Arc<dyn ImageBackend> {
    Arc::new(LocalImageStorage::new(config))
}
