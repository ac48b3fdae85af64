//! The product list as an explicit state object.
//!
//! `ProductCatalog` owns the records and exposes every mutation the calculator
//! needs. Lookups that miss are no-ops: operations report what changed so a
//! caller never has to assume a mutation happened.

use std::collections::HashMap;

use craftledger_core::ProductId;

use crate::duplicate::find_duplicate_product;
use crate::filter::FilterOptions;
use crate::group::{GroupKey, ProductGroup, group_products_by_key};
use crate::record::{NewProduct, ProductRecord};

/// Result of saving a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was new and was appended.
    Inserted { id: ProductId },
    /// An identical variant existed; its stock was bumped and the new record
    /// discarded.
    Merged { id: ProductId, stock: u32 },
}

impl SaveOutcome {
    /// Id of the record that now holds the saved variant.
    pub fn id(&self) -> ProductId {
        match self {
            SaveOutcome::Inserted { id } | SaveOutcome::Merged { id, .. } => *id,
        }
    }
}

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// One more unit; unbounded.
    Add,
    /// One fewer unit; never below zero.
    Remove,
}

impl StockAction {
    pub fn apply(self, stock: u32) -> u32 {
        match self {
            StockAction::Add => stock.saturating_add(1),
            StockAction::Remove => stock.saturating_sub(1),
        }
    }
}

/// Stock of one variant before and after an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub id: ProductId,
    pub before: u32,
    pub after: u32,
}

impl StockChange {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Save a record, merging it into an identical variant if one exists.
    pub fn save_product(&mut self, record: ProductRecord) -> SaveOutcome {
        let duplicate = find_duplicate_product(&record, &self.products).map(|p| p.id);

        match duplicate.and_then(|id| self.products.iter_mut().find(|p| p.id == id)) {
            Some(existing) => {
                existing.stock = StockAction::Add.apply(existing.stock);
                SaveOutcome::Merged {
                    id: existing.id,
                    stock: existing.stock,
                }
            }
            None => {
                let id = record.id;
                self.products.push(record);
                SaveOutcome::Inserted { id }
            }
        }
    }

    /// Adjust one variant's stock. `None` if the id is unknown.
    pub fn adjust_variant_stock(&mut self, id: ProductId, action: StockAction) -> Option<StockChange> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        let before = product.stock;
        product.stock = action.apply(before);
        Some(StockChange {
            id,
            before,
            after: product.stock,
        })
    }

    /// Adjust every variant of a group. Variants no longer present are skipped.
    pub fn adjust_group_stock(&mut self, group: &ProductGroup, action: StockAction) -> Vec<StockChange> {
        group
            .variants
            .iter()
            .filter_map(|v| self.adjust_variant_stock(v.id, action))
            .collect()
    }

    /// Remove one record. Returns whether anything was removed.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Remove every record listed as a variant of `group`, in one pass.
    /// Returns how many records were removed.
    pub fn delete_group(&mut self, group: &ProductGroup) -> usize {
        let ids = group.variant_ids();
        let before = self.products.len();
        self.products.retain(|p| !ids.contains(&p.id));
        before - self.products.len()
    }

    pub fn groups(&self) -> Vec<ProductGroup> {
        group_products_by_key(&self.products)
    }

    pub fn find_group(&self, key: &GroupKey) -> Option<ProductGroup> {
        self.groups().into_iter().find(|g| g.key() == *key)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_products(&self.products)
    }

    /// A draft pre-filled from the group's first variant, for creating a new
    /// variant of the same product. Stock and sold are left to the defaults.
    pub fn template_from_group(&self, group: &ProductGroup) -> Option<NewProduct> {
        let first = group.variants.first()?;
        let product = self.get(first.id)?;

        Some(NewProduct {
            name: Some(product.name.clone()),
            color: first.color.clone(),
            hook: Some(product.hook.clone()),
            input: product.input(),
            stock: None,
            sold: None,
        })
    }

    /// Attach pin ids to records by product name. When several pins share a
    /// name the last one wins. Returns how many records were linked.
    pub fn link_pins<I, S>(&mut self, pins: I) -> usize
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let by_name: HashMap<String, u64> = pins
            .into_iter()
            .map(|(name, id)| (name.into(), id))
            .collect();

        let mut linked = 0;
        for product in &mut self.products {
            if let Some(pin_id) = by_name.get(&product.name) {
                product.pin_id = Some(*pin_id);
                linked += 1;
            }
        }
        linked
    }
}
