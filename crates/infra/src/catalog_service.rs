//! Catalog controller: owns the in-memory catalog and its store.
//!
//! Every mutation runs against a staged copy of the catalog. The staged list
//! is persisted first and only committed in memory once the store accepts it,
//! so a failed save leaves the catalog exactly as it was. Mutations that
//! change nothing are not persisted.
//!
//! A catalog opened with [`CatalogService::load`] after a failed load is
//! read-only: writing its empty list back would overwrite the records the
//! store could not read.

use thiserror::Error;

use craftledger_core::{DomainError, ProductId};
use craftledger_products::{
    GroupFilter, GroupKey, NewProduct, ProductCatalog, ProductGroup, ProductRecord, SaveOutcome,
    StockAction, StockChange, normalize_colors,
};

use crate::product_store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to persist products: {0}")]
    Store(#[from] StoreError),

    #[error("product list could not be loaded; refusing to overwrite it")]
    ReadOnly,
}

#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
    catalog: ProductCatalog,
    read_only: bool,
}

impl<S: ProductStore> CatalogService<S> {
    /// Load the catalog from `store`. A failed load starts from an empty,
    /// read-only list: every mutation then fails with
    /// [`ServiceError::ReadOnly`].
    pub fn load(store: S) -> Self {
        match store.load_products() {
            Ok(products) => Self::loaded(store, products),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load products; starting empty and read-only");
                Self {
                    store,
                    catalog: ProductCatalog::default(),
                    read_only: true,
                }
            }
        }
    }

    /// Load the catalog, surfacing a failed load instead of starting empty.
    pub fn try_load(store: S) -> Result<Self, StoreError> {
        let products = store.load_products()?;
        Ok(Self::loaded(store, products))
    }

    fn loaded(store: S, products: Vec<ProductRecord>) -> Self {
        tracing::info!(count = products.len(), "product catalog loaded");
        Self {
            store,
            catalog: ProductCatalog::new(products),
            read_only: false,
        }
    }

    /// Whether the catalog failed to load and rejects writes.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn groups(&self) -> Vec<ProductGroup> {
        self.catalog.groups()
    }

    pub fn filtered_groups(&self, filter: &GroupFilter) -> Vec<ProductGroup> {
        filter.apply(self.catalog.groups())
    }

    /// Validate, price and save a draft. An identical variant already in the
    /// catalog gets one more unit of stock instead of a new record.
    pub fn save_product(&mut self, mut draft: NewProduct) -> Result<SaveOutcome, ServiceError> {
        draft.validate()?;
        draft.color = normalize_colors(&draft.color);
        let record = draft.into_record();

        let outcome = self.persist_with(|c| c.save_product(record))?;
        match outcome {
            SaveOutcome::Inserted { id } => tracing::info!(product_id = %id, "product added"),
            SaveOutcome::Merged { id, stock } => {
                tracing::info!(product_id = %id, stock, "duplicate product merged into stock")
            }
        }
        Ok(outcome)
    }

    /// Adjust one variant. `Ok(None)` when the id is unknown.
    pub fn adjust_variant_stock(
        &mut self,
        id: ProductId,
        action: StockAction,
    ) -> Result<Option<StockChange>, ServiceError> {
        let change = self.persist_with(|c| c.adjust_variant_stock(id, action))?;
        if let Some(change) = change {
            tracing::info!(product_id = %id, before = change.before, after = change.after, "variant stock adjusted");
        } else {
            tracing::debug!(product_id = %id, "stock adjustment for unknown product skipped");
        }
        Ok(change)
    }

    /// Adjust every variant of the group with `key`. Empty when no such group.
    pub fn adjust_group_stock(
        &mut self,
        key: &GroupKey,
        action: StockAction,
    ) -> Result<Vec<StockChange>, ServiceError> {
        self.ensure_writable()?;
        let Some(group) = self.catalog.find_group(key) else {
            tracing::debug!(name = key.name(), "stock adjustment for unknown group skipped");
            return Ok(Vec::new());
        };

        let changes = self.persist_with(|c| c.adjust_group_stock(&group, action))?;
        tracing::info!(name = %group.name, variants = changes.len(), "group stock adjusted");
        Ok(changes)
    }

    /// Delete one record. `Ok(false)` when the id is unknown.
    pub fn delete_product(&mut self, id: ProductId) -> Result<bool, ServiceError> {
        self.ensure_writable()?;
        let mut staged = self.catalog.clone();
        if !staged.delete_product(id) {
            tracing::debug!(product_id = %id, "delete of unknown product skipped");
            return Ok(false);
        }

        self.store.delete_product(id).inspect_err(|err| {
            tracing::warn!(product_id = %id, error = %err, "failed to delete product");
        })?;
        self.catalog = staged;
        tracing::info!(product_id = %id, "product deleted");
        Ok(true)
    }

    /// Delete every variant of the group with `key`, in one save. Returns how
    /// many records were removed.
    pub fn delete_group(&mut self, key: &GroupKey) -> Result<usize, ServiceError> {
        self.ensure_writable()?;
        let Some(group) = self.catalog.find_group(key) else {
            tracing::debug!(name = key.name(), "delete of unknown group skipped");
            return Ok(0);
        };

        let removed = self.persist_with(|c| c.delete_group(&group))?;
        tracing::info!(name = %group.name, removed, "product group deleted");
        Ok(removed)
    }

    /// Attach pin ids by product name and persist the links.
    pub fn link_pins<I, N>(&mut self, pins: I) -> Result<usize, ServiceError>
    where
        I: IntoIterator<Item = (N, u64)>,
        N: Into<String>,
    {
        let linked = self.persist_with(|c| c.link_pins(pins))?;
        if linked > 0 {
            tracing::info!(linked, "pins linked to products");
        }
        Ok(linked)
    }

    /// Apply `mutate` to a staged copy; persist and commit it if it differs
    /// from the current catalog.
    fn persist_with<T>(
        &mut self,
        mutate: impl FnOnce(&mut ProductCatalog) -> T,
    ) -> Result<T, ServiceError> {
        self.ensure_writable()?;
        let mut staged = self.catalog.clone();
        let out = mutate(&mut staged);

        if staged == self.catalog {
            return Ok(out);
        }

        self.store.save_products(staged.products()).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to save products; catalog left unchanged");
        })?;
        self.catalog = staged;
        Ok(out)
    }

    fn ensure_writable(&self) -> Result<(), ServiceError> {
        if self.read_only {
            tracing::warn!("write rejected: product list was not loaded");
            return Err(ServiceError::ReadOnly);
        }
        Ok(())
    }
}
