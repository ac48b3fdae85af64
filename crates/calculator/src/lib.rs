//! Cost engine for handmade products.
//!
//! Maps a product's raw attributes (weights, yarn, hours, extras, sale price)
//! to a cost/profit breakdown and suggested markup prices. Everything here is
//! pure: the only inputs are the arguments and the compiled-in reference
//! tables.

pub mod coerce;
pub mod cost;
pub mod format;
pub mod markup;
pub mod reference;

pub use coerce::coerce_number;
pub use cost::{CostBreakdown, ExtraLine, ProductInput, calculate_costs};
pub use format::{format_currency, format_percentage};
pub use markup::{Markups, calculate_markups, calculate_profit_percentage};
pub use reference::{
    DEFAULT_YARN_TYPE, EXTRAS, ExtraItem, FILLING_UNIT_PRICE, LABOR_RATE_PER_HOUR, YARN_TYPES,
    YarnType, all_extras, all_yarn_types, extra_by_name, yarn_type, yarn_type_or_default,
};
