use std::fs;
use std::path::{Path, PathBuf};

use craftledger_core::ProductId;
use craftledger_products::ProductRecord;

use super::r#trait::{ProductStore, StoreError};
use crate::config::StoreConfig;

/// Product list stored as a pretty-printed JSON array in a single file.
///
/// A missing or empty file loads as an empty list. Saves go through a
/// sibling temp file and a rename, so readers never see a half-written list.
#[derive(Debug, Clone)]
pub struct JsonFileProductStore {
    path: PathBuf,
}

impl JsonFileProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.products_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProductStore for JsonFileProductStore {
    fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_products(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(products)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = products.len(), "product list written");
        Ok(())
    }

    fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        let mut products = self.load_products()?;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Ok(());
        }
        self.save_products(&products)
    }
}
