use super::ProductStore;
use crate::error::{Result, StockError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Stores the collection as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("products.json");
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl ProductStore for JsonFileStore {
    fn read(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "data file empty");
            return Ok(Vec::new());
        }

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        debug!(count = products.len(), "loaded products");
        Ok(products)
    }

    fn write(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(products).map_err(StockError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(StockError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StockError::Io(e));
        }

        debug!(count = products.len(), path = %self.path.display(), "saved products");
        Ok(())
    }
}
