//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};

use craftledger_calculator::{DEFAULT_YARN_TYPE, ExtraLine, ProductInput, coerce_number, extra_by_name};
use craftledger_core::ProductId;
use craftledger_infra::StoreConfig;
use craftledger_products::{GroupFilter, GroupKey, NewProduct, StockAction, StockFilter};

#[derive(Parser, Debug)]
#[command(name = "craftledger", about = "Cost calculator and stock for handmade products")]
pub struct Cli {
    /// Directory holding the product file (overrides CRAFTLEDGER_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::from_env();
        match &self.data_dir {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the cost breakdown and suggested prices without saving
    Calc(PricingArgs),

    /// Price and save a product (re-adding an identical variant adds stock)
    Add(AddArgs),

    /// List product groups
    List(ListArgs),

    /// Add or remove one unit of a single variant
    Stock {
        id: ProductId,
        #[arg(value_enum)]
        action: StockActionArg,
    },

    /// Add or remove one unit of every variant in a group
    GroupStock {
        #[command(flatten)]
        group: GroupArgs,
        #[arg(value_enum)]
        action: StockActionArg,
    },

    /// Delete a single variant
    Delete { id: ProductId },

    /// Delete every variant of a group
    DeleteGroup(GroupArgs),

    /// List known yarn types
    Yarns,

    /// List the extras catalog
    Extras,
}

/// Raw pricing input. Numbers that do not parse count as zero.
#[derive(clap::Args, Debug, Clone)]
pub struct PricingArgs {
    /// Finished weight in grams
    #[arg(long, default_value = "0")]
    pub total_weight: String,

    /// Yarn weight in grams
    #[arg(long, default_value = "0")]
    pub yarn_weight: String,

    #[arg(long, default_value = DEFAULT_YARN_TYPE)]
    pub yarn_type: String,

    /// Hours of work
    #[arg(long, default_value = "0")]
    pub hours: String,

    /// Catalog extra as NAME=QTY (repeatable)
    #[arg(long = "extra")]
    pub extras: Vec<String>,

    #[arg(long, default_value = "0")]
    pub sale_price: String,
}

impl PricingArgs {
    pub fn to_input(&self) -> Result<ProductInput> {
        let extras = self
            .extras
            .iter()
            .map(|raw| parse_extra(raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProductInput {
            total_weight: coerce_number(&self.total_weight),
            yarn_weight: coerce_number(&self.yarn_weight),
            yarn_type: self.yarn_type.clone(),
            hours: coerce_number(&self.hours),
            extras,
            sale_price: coerce_number(&self.sale_price),
        })
    }
}

/// `Olhos 12mm=2` → catalog price × 2. A bare name means quantity 1.
pub fn parse_extra(raw: &str) -> Result<ExtraLine> {
    let (name, qty) = match raw.rsplit_once('=') {
        Some((name, qty)) => (name.trim(), coerce_number(qty)),
        None => (raw.trim(), 1.0),
    };
    let item = extra_by_name(name).ok_or_else(|| anyhow!("unknown extra: {name}"))?;
    Ok(ExtraLine::new(item.price, qty))
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Colour (repeatable)
    #[arg(long = "color", required = true)]
    pub colors: Vec<String>,

    /// Hook size, e.g. 3.5mm
    #[arg(long)]
    pub hook: Option<String>,

    /// Initial stock (defaults to 1)
    #[arg(long)]
    pub stock: Option<u32>,

    #[command(flatten)]
    pub pricing: PricingArgs,
}

impl AddArgs {
    pub fn to_draft(&self) -> Result<NewProduct> {
        Ok(NewProduct {
            name: Some(self.name.clone()),
            color: self.colors.clone(),
            hook: self.hook.clone(),
            input: self.pricing.to_input().context("invalid pricing input")?,
            stock: self.stock,
            sold: None,
        })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockActionArg {
    Add,
    Remove,
}

impl From<StockActionArg> for StockAction {
    fn from(value: StockActionArg) -> Self {
        match value {
            StockActionArg::Add => StockAction::Add,
            StockActionArg::Remove => StockAction::Remove,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilterArg {
    #[default]
    Any,
    /// Groups with no stock left
    Empty,
    /// Groups with at least one unit
    InStock,
}

impl From<StockFilterArg> for StockFilter {
    fn from(value: StockFilterArg) -> Self {
        match value {
            StockFilterArg::Any => StockFilter::Any,
            StockFilterArg::Empty => StockFilter::OutOfStock,
            StockFilterArg::InStock => StockFilter::InStock,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Name contains (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub yarn_type: Option<String>,

    #[arg(long)]
    pub hook: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub stock: StockFilterArg,

    /// Print groups as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn to_filter(&self) -> GroupFilter {
        GroupFilter {
            name: self.name.clone(),
            color: self.color.clone(),
            yarn_type: self.yarn_type.clone(),
            hook: self.hook.clone(),
            stock: self.stock.into(),
        }
    }
}

/// Identifies a group by its key.
#[derive(clap::Args, Debug)]
pub struct GroupArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = DEFAULT_YARN_TYPE)]
    pub yarn_type: String,

    #[arg(long)]
    pub sale_price: String,
}

impl GroupArgs {
    pub fn key(&self) -> GroupKey {
        GroupKey::new(
            self.name.as_str(),
            self.yarn_type.as_str(),
            coerce_number(&self.sale_price),
        )
    }
}
