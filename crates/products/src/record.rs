//! Persisted product records and the drafts they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use craftledger_calculator::coerce::de;
use craftledger_calculator::{
    CostBreakdown, DEFAULT_YARN_TYPE, ExtraLine, ProductInput, calculate_costs,
};
use craftledger_core::{DomainError, DomainResult, Entity, ProductId};

/// Stand-in for a missing colour or hook.
pub const PLACEHOLDER: &str = "---";

/// Name given to records saved without one.
pub const UNNAMED_PRODUCT: &str = "Unnamed";

/// A priced, stocked finished item.
///
/// Serialized with camelCase keys and the cost breakdown flattened into the
/// record, so a saved list is a plain JSON array of flat objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub color: Vec<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub hook: String,
    #[serde(default, deserialize_with = "de::text")]
    pub yarn_type: String,
    #[serde(default, deserialize_with = "de::number")]
    pub total_weight: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub yarn_weight: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub hours: f64,
    #[serde(default)]
    pub extras: Vec<ExtraLine>,
    #[serde(flatten)]
    pub costs: CostBreakdown,
    #[serde(default, deserialize_with = "de::count")]
    pub stock: u32,
    #[serde(default, deserialize_with = "de::count")]
    pub sold: u32,
    pub timestamp: DateTime<Utc>,
    /// Catalogue pin this product was made from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_id: Option<u64>,
}

impl ProductRecord {
    pub fn sale_price(&self) -> f64 {
        self.costs.sale_price
    }

    /// The calculation input this record was priced from.
    pub fn input(&self) -> ProductInput {
        ProductInput {
            total_weight: self.total_weight,
            yarn_weight: self.yarn_weight,
            yarn_type: self.yarn_type.clone(),
            hours: self.hours,
            extras: self.extras.clone(),
            sale_price: self.costs.sale_price,
        }
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// Older files store a single colour as a bare string.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(c)) => vec![c],
        Some(OneOrMany::Many(cs)) => cs,
        None => Vec::new(),
    })
}

/// A product as submitted for saving, before costs and identity are assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(flatten)]
    pub input: ProductInput,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub sold: Option<u32>,
}

impl NewProduct {
    /// A draft must be named and carry at least one colour before it is saved.
    pub fn validate(&self) -> DomainResult<()> {
        let named = self.name.as_deref().is_some_and(|n| !n.trim().is_empty());
        if !named {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.color.iter().any(|c| !c.trim().is_empty()) {
            return Err(DomainError::validation("at least one colour is required"));
        }
        Ok(())
    }

    /// Build a record with a fresh id, stamped now.
    pub fn into_record(self) -> ProductRecord {
        create_product_record(&self, ProductId::new(), Utc::now())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Price a draft and turn it into a record.
///
/// Missing name, colour and hook get placeholders; yarn falls back to the
/// default key; stock defaults to 1 and sold to 0.
pub fn create_product_record(
    draft: &NewProduct,
    id: ProductId,
    created_at: DateTime<Utc>,
) -> ProductRecord {
    let costs = calculate_costs(&draft.input);
    let input = &draft.input;

    let color = if draft.color.is_empty() {
        vec![PLACEHOLDER.to_string()]
    } else {
        draft.color.clone()
    };

    let yarn_type = if input.yarn_type.trim().is_empty() {
        DEFAULT_YARN_TYPE.to_string()
    } else {
        input.yarn_type.clone()
    };

    ProductRecord {
        id,
        name: non_blank(draft.name.as_deref())
            .unwrap_or(UNNAMED_PRODUCT)
            .to_string(),
        color,
        hook: non_blank(draft.hook.as_deref())
            .unwrap_or(PLACEHOLDER)
            .to_string(),
        yarn_type,
        total_weight: input.total_weight,
        yarn_weight: input.yarn_weight,
        hours: input.hours,
        extras: input.extras.clone(),
        costs,
        stock: draft.stock.unwrap_or(1),
        sold: draft.sold.unwrap_or(0),
        timestamp: created_at,
        pin_id: None,
    }
}

/// Trim and lowercase colours, dropping blanks and case-insensitive repeats.
/// First occurrence wins.
pub fn normalize_colors<I, S>(colors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for c in colors {
        let c = c.as_ref().trim().to_lowercase();
        if !c.is_empty() && !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
