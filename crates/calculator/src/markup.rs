//! Suggested sale prices and margins.

use serde::{Deserialize, Serialize};

use craftledger_core::ValueObject;

/// Suggested sale prices at fixed markups over a base cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Markups {
    #[serde(rename = "markup10")]
    pub markup_10: f64,
    #[serde(rename = "markup25")]
    pub markup_25: f64,
    #[serde(rename = "markup50")]
    pub markup_50: f64,
    #[serde(rename = "markup100")]
    pub markup_100: f64,
}

impl ValueObject for Markups {}

impl Markups {
    /// `(markup percent, suggested price)` pairs, smallest markup first.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> {
        [
            (10, self.markup_10),
            (25, self.markup_25),
            (50, self.markup_50),
            (100, self.markup_100),
        ]
        .into_iter()
    }
}

/// Suggested prices at +10%, +25%, +50% and +100% over `base_cost`.
pub fn calculate_markups(base_cost: f64) -> Markups {
    Markups {
        markup_10: base_cost * 1.1,
        markup_25: base_cost * 1.25,
        markup_50: base_cost * 1.5,
        markup_100: base_cost * 2.0,
    }
}

/// Profit as a percentage of the sale price; `0` when there is no sale price.
pub fn calculate_profit_percentage(profit: f64, sale_price: f64) -> f64 {
    if sale_price == 0.0 {
        return 0.0;
    }
    profit / sale_price * 100.0
}
