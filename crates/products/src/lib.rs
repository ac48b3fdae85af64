//! Product catalog: records, grouping, duplicate detection and stock.
//!
//! Deterministic domain logic over an in-memory list of product records. No
//! IO happens here; persistence is the caller's job.

pub mod catalog;
pub mod duplicate;
pub mod filter;
pub mod group;
pub mod record;

pub use catalog::{ProductCatalog, SaveOutcome, StockAction, StockChange};
pub use duplicate::{find_duplicate_product, same_color_set};
pub use filter::{FilterOptions, GroupFilter, StockFilter};
pub use group::{GroupKey, ProductGroup, VariantView, group_products_by_key};
pub use record::{
    NewProduct, PLACEHOLDER, ProductRecord, UNNAMED_PRODUCT, create_product_record,
    normalize_colors,
};
