//! Filtering display groups and listing the values worth filtering on.

use crate::group::ProductGroup;
use crate::record::ProductRecord;

/// Stock filter over a group's total stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    #[default]
    Any,
    /// Total stock is zero.
    OutOfStock,
    /// At least one unit in stock.
    InStock,
}

impl StockFilter {
    pub fn matches(&self, total_stock: u64) -> bool {
        match self {
            StockFilter::Any => true,
            StockFilter::OutOfStock => total_stock == 0,
            StockFilter::InStock => total_stock > 0,
        }
    }
}

/// Criteria for narrowing the group list. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    /// Case-insensitive substring of the group name.
    pub name: Option<String>,
    /// Case-insensitive colour carried by any variant.
    pub color: Option<String>,
    /// Exact yarn key.
    pub yarn_type: Option<String>,
    /// Exact hook size on any variant.
    pub hook: Option<String>,
    pub stock: StockFilter,
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GroupFilter {
    pub fn matches(&self, group: &ProductGroup) -> bool {
        if let Some(name) = set(&self.name) {
            if !group.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(color) = set(&self.color) {
            let wanted = color.to_lowercase();
            let found = group
                .variants
                .iter()
                .flat_map(|v| v.color.iter())
                .any(|c| c.to_lowercase() == wanted);
            if !found {
                return false;
            }
        }

        if let Some(yarn) = set(&self.yarn_type) {
            if group.yarn_type != yarn {
                return false;
            }
        }

        if let Some(hook) = set(&self.hook) {
            if !group.variants.iter().any(|v| v.hook == hook) {
                return false;
            }
        }

        self.stock.matches(group.total_stock())
    }

    /// Keep only the groups that match, preserving order.
    pub fn apply(&self, groups: Vec<ProductGroup>) -> Vec<ProductGroup> {
        groups.into_iter().filter(|g| self.matches(g)).collect()
    }
}

/// Distinct values present in a product list, for populating filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Lowercased, sorted, unique.
    pub colors: Vec<String>,
    pub hooks: Vec<String>,
    pub yarn_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_products(products: &[ProductRecord]) -> Self {
        let mut colors: Vec<String> = products
            .iter()
            .flat_map(|p| p.color.iter().map(|c| c.to_lowercase()))
            .collect();
        let mut hooks: Vec<String> = products.iter().map(|p| p.hook.clone()).collect();
        let mut yarn_types: Vec<String> = products.iter().map(|p| p.yarn_type.clone()).collect();

        for values in [&mut colors, &mut hooks, &mut yarn_types] {
            values.sort();
            values.dedup();
        }

        Self {
            colors,
            hooks,
            yarn_types,
        }
    }
}
