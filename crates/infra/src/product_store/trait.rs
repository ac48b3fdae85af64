use std::sync::Arc;

use thiserror::Error;

use craftledger_core::ProductId;
use craftledger_products::ProductRecord;

/// Persistence failure.
///
/// These are infrastructure errors, distinct from domain validation. The
/// store never retries; callers decide how to report them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("product list is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Whole-list product persistence.
///
/// - `load_products` returns an empty list when nothing has been saved yet.
/// - `save_products` replaces the stored list with the given one.
/// - `delete_product` removes one record; deleting an absent id succeeds.
pub trait ProductStore: Send + Sync {
    fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError>;

    fn save_products(&self, products: &[ProductRecord]) -> Result<(), StoreError>;

    fn delete_product(&self, id: ProductId) -> Result<(), StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn load_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        (**self).load_products()
    }

    fn save_products(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        (**self).save_products(products)
    }

    fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete_product(id)
    }
}
