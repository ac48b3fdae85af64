//! Compiled-in reference data: yarn prices, extras catalog and rates.
//!
//! These tables are constants, not configuration. Changing a price means
//! shipping a new build.

use serde::Serialize;

use craftledger_core::ValueObject;

/// Filling (stuffing) price per gram.
pub const FILLING_UNIT_PRICE: f64 = 0.01829;

/// Labor price per hour of work.
pub const LABOR_RATE_PER_HOUR: f64 = 1.0;

/// Yarn key used when a record names an unknown yarn.
pub const DEFAULT_YARN_TYPE: &str = "baby-snuggle";

/// A yarn line with its per-gram prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YarnType {
    pub key: &'static str,
    pub name: &'static str,
    /// Per-gram price at list price.
    pub normal_price: f64,
    /// Per-gram price when bought on promotion.
    pub promo_price: f64,
}

impl ValueObject for YarnType {}

/// A fixed-price add-on (safety eyes, key rings, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtraItem {
    pub name: &'static str,
    pub price: f64,
}

impl ValueObject for ExtraItem {}

pub static YARN_TYPES: [YarnType; 3] = [
    YarnType {
        key: DEFAULT_YARN_TYPE,
        name: "Baby Snuggle Solid",
        normal_price: 0.08,
        promo_price: 0.044,
    },
    YarnType {
        key: "honey-bunny",
        name: "Honey Bunny",
        normal_price: 0.079,
        promo_price: 0.054,
    },
    YarnType {
        key: "rainbow-cotton",
        name: "Rainbow Cotton 8/8",
        normal_price: 0.045,
        promo_price: 0.045,
    },
];

pub static EXTRAS: [ExtraItem; 3] = [
    ExtraItem {
        name: "Olhos 12mm",
        price: 0.116,
    },
    ExtraItem {
        name: "Chaveiro",
        price: 0.07,
    },
    ExtraItem {
        name: "Olhos 16mm",
        price: 0.24,
    },
];

/// Look up a yarn by key.
pub fn yarn_type(key: &str) -> Option<&'static YarnType> {
    YARN_TYPES.iter().find(|y| y.key == key)
}

/// Look up a yarn by key, falling back to [`DEFAULT_YARN_TYPE`].
pub fn yarn_type_or_default(key: &str) -> &'static YarnType {
    yarn_type(key).unwrap_or(&YARN_TYPES[0])
}

pub fn all_yarn_types() -> &'static [YarnType] {
    &YARN_TYPES
}

/// Look up an extra by its exact catalog name.
pub fn extra_by_name(name: &str) -> Option<&'static ExtraItem> {
    EXTRAS.iter().find(|e| e.name == name)
}

pub fn all_extras() -> &'static [ExtraItem] {
    &EXTRAS
}
