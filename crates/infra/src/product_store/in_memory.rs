use std::sync::RwLock;

use craftledger_core::ProductId;
use craftledger_products::ProductRecord;

use super::r#trait::{ProductStore, StoreError};

/// In-memory product store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<ProductRecord>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<ProductRecord>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl ProductStore for InMemoryProductStore {
    fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.clone())
    }

    fn save_products(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        let mut stored = self.products.write().map_err(|_| poisoned())?;
        *stored = products.to_vec();
        Ok(())
    }

    fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        let mut stored = self.products.write().map_err(|_| poisoned())?;
        stored.retain(|p| p.id != id);
        Ok(())
    }
}
