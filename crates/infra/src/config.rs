//! Configuration loading and representation.

use std::path::PathBuf;

/// Directory holding the data files.
pub const DATA_DIR_ENV: &str = "CRAFTLEDGER_DATA_DIR";

/// File name of the product list inside the data directory.
pub const PRODUCTS_FILE_ENV: &str = "CRAFTLEDGER_PRODUCTS_FILE";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_PRODUCTS_FILE: &str = "calculator.json";

/// Where the product list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub products_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            products_file: DEFAULT_PRODUCTS_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Read the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let data_dir = get(DATA_DIR_ENV).map(PathBuf::from).unwrap_or_else(|| {
            tracing::debug!("{DATA_DIR_ENV} not set; using {DEFAULT_DATA_DIR}");
            defaults.data_dir
        });

        Self {
            data_dir,
            products_file: get(PRODUCTS_FILE_ENV).unwrap_or(defaults.products_file),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }
}
