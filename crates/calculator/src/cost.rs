//! Production cost breakdown.

use serde::{Deserialize, Serialize};

use craftledger_core::ValueObject;

use crate::coerce::de;
use crate::reference::{FILLING_UNIT_PRICE, LABOR_RATE_PER_HOUR, yarn_type_or_default};

/// One extras line on a product: a unit price and a quantity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtraLine {
    #[serde(
        default,
        deserialize_with = "de::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub quantity: f64,
}

impl ValueObject for ExtraLine {}

impl ExtraLine {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self {
            price: Some(price),
            quantity,
        }
    }

    /// Contribution to the extras cost. Lines without a price or with a
    /// non-positive quantity contribute nothing.
    pub fn cost(&self) -> f64 {
        match self.price {
            Some(price) if self.quantity > 0.0 => price * self.quantity,
            _ => 0.0,
        }
    }
}

/// Raw calculation input. Every numeric field defaults to `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Finished piece weight in grams (yarn + filling).
    #[serde(default, deserialize_with = "de::number")]
    pub total_weight: f64,
    /// Yarn used in grams.
    #[serde(default, deserialize_with = "de::number")]
    pub yarn_weight: f64,
    #[serde(default, deserialize_with = "de::text")]
    pub yarn_type: String,
    #[serde(default, deserialize_with = "de::number")]
    pub hours: f64,
    #[serde(default)]
    pub extras: Vec<ExtraLine>,
    #[serde(default, deserialize_with = "de::number")]
    pub sale_price: f64,
}

/// Derived costs and profits for one product.
///
/// `total_* = yarn_cost_* + filling_cost + extras_cost + labor_cost` and
/// `profit_* = sale_price - total_*`, for both the normal and promo yarn price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[serde(default, deserialize_with = "de::number")]
    pub yarn_cost_normal: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub yarn_cost_promo: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub filling_cost: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub labor_cost: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub extras_cost: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub total_normal: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub total_promo: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub sale_price: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub profit_normal: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub profit_promo: f64,
}

impl ValueObject for CostBreakdown {}

impl ProductInput {
    /// Grams of filling: whatever weight the yarn does not account for.
    /// Never negative.
    pub fn filling_weight(&self) -> f64 {
        (self.total_weight - self.yarn_weight).max(0.0)
    }
}

/// Compute the cost breakdown for a product. Never fails: unknown yarn keys
/// use the default yarn's prices.
pub fn calculate_costs(input: &ProductInput) -> CostBreakdown {
    let yarn = yarn_type_or_default(&input.yarn_type);

    let yarn_cost_normal = input.yarn_weight * yarn.normal_price;
    let yarn_cost_promo = input.yarn_weight * yarn.promo_price;
    let filling_cost = input.filling_weight() * FILLING_UNIT_PRICE;
    let labor_cost = input.hours * LABOR_RATE_PER_HOUR;
    let extras_cost: f64 = input.extras.iter().map(ExtraLine::cost).sum();

    let total_normal = yarn_cost_normal + filling_cost + extras_cost + labor_cost;
    let total_promo = yarn_cost_promo + filling_cost + extras_cost + labor_cost;

    CostBreakdown {
        yarn_cost_normal,
        yarn_cost_promo,
        filling_cost,
        labor_cost,
        extras_cost,
        total_normal,
        total_promo,
        sale_price: input.sale_price,
        profit_normal: input.sale_price - total_normal,
        profit_promo: input.sale_price - total_promo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_input() -> ProductInput {
        ProductInput {
            total_weight: 150.0,
            yarn_weight: 100.0,
            yarn_type: "baby-snuggle".to_string(),
            hours: 2.0,
            extras: vec![ExtraLine::new(1.0, 2.0)],
            sale_price: 20.0,
        }
    }

    #[test]
    fn reference_breakdown() {
        let costs = calculate_costs(&sample_input());

        assert_close(costs.yarn_cost_normal, 8.0);
        assert_close(costs.yarn_cost_promo, 4.4);
        assert_close(costs.filling_cost, 0.9145);
        assert_close(costs.labor_cost, 2.0);
        assert_close(costs.extras_cost, 2.0);
        assert_close(costs.total_normal, 12.9145);
        assert_close(costs.total_promo, 9.3145);
        assert_close(costs.sale_price, 20.0);
        assert_close(costs.profit_normal, 7.0855);
        assert_close(costs.profit_promo, 10.6855);
    }

    #[test]
    fn filling_is_clamped_when_yarn_exceeds_total() {
        let input = ProductInput {
            total_weight: 50.0,
            yarn_weight: 80.0,
            ..sample_input()
        };
        assert_eq!(input.filling_weight(), 0.0);
        assert_eq!(calculate_costs(&input).filling_cost, 0.0);
    }

    #[test]
    fn unknown_yarn_uses_default_prices() {
        let known = calculate_costs(&sample_input());
        let unknown = calculate_costs(&ProductInput {
            yarn_type: "mystery-wool".to_string(),
            ..sample_input()
        });
        assert_eq!(known, unknown);
    }

    #[test]
    fn extras_without_price_or_quantity_cost_nothing() {
        let input = ProductInput {
            extras: vec![
                ExtraLine::new(0.24, 3.0),
                ExtraLine::new(5.0, 0.0),
                ExtraLine::new(5.0, -2.0),
                ExtraLine {
                    price: None,
                    quantity: 4.0,
                },
            ],
            ..ProductInput::default()
        };
        assert_close(calculate_costs(&input).extras_cost, 0.72);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let costs = calculate_costs(&ProductInput::default());
        assert_eq!(costs, CostBreakdown::default());
    }

    #[test]
    fn deserializes_form_shaped_input() {
        let input: ProductInput = serde_json::from_str(
            r#"{
                "totalWeight": "150",
                "yarnWeight": 100,
                "yarnType": "baby-snuggle",
                "hours": "",
                "extras": [{"price": 1, "quantity": 2}, {"quantity": 1}],
                "salePrice": null
            }"#,
        )
        .unwrap();

        assert_eq!(input.total_weight, 150.0);
        assert_eq!(input.yarn_weight, 100.0);
        assert_eq!(input.hours, 0.0);
        assert_eq!(input.sale_price, 0.0);
        assert_eq!(input.extras[1].price, None);
        assert_close(calculate_costs(&input).extras_cost, 2.0);
    }

    #[test]
    fn breakdown_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(calculate_costs(&sample_input())).unwrap();
        assert!(json.get("yarnCostNormal").is_some());
        assert!(json.get("profitPromo").is_some());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Filling weight is total minus yarn when the yarn fits, zero otherwise.
            #[test]
            fn filling_weight_is_clamped(
                total in 0.0f64..10_000.0,
                yarn in 0.0f64..10_000.0,
            ) {
                let input = ProductInput {
                    total_weight: total,
                    yarn_weight: yarn,
                    ..ProductInput::default()
                };
                if total >= yarn {
                    prop_assert_eq!(input.filling_weight(), total - yarn);
                } else {
                    prop_assert_eq!(input.filling_weight(), 0.0);
                }
            }

            /// Totals and profits always satisfy the breakdown identities.
            #[test]
            fn totals_and_profits_add_up(
                total in 0.0f64..1_000.0,
                yarn in 0.0f64..1_000.0,
                hours in 0.0f64..100.0,
                sale in 0.0f64..500.0,
                yarn_idx in 0usize..4,
            ) {
                let keys = ["baby-snuggle", "honey-bunny", "rainbow-cotton", "unknown"];
                let c = calculate_costs(&ProductInput {
                    total_weight: total,
                    yarn_weight: yarn,
                    yarn_type: keys[yarn_idx].to_string(),
                    hours,
                    extras: vec![ExtraLine::new(0.116, 2.0)],
                    sale_price: sale,
                });

                let normal = c.yarn_cost_normal + c.filling_cost + c.extras_cost + c.labor_cost;
                let promo = c.yarn_cost_promo + c.filling_cost + c.extras_cost + c.labor_cost;
                prop_assert!((c.total_normal - normal).abs() < 1e-9);
                prop_assert!((c.total_promo - promo).abs() < 1e-9);
                prop_assert!((c.profit_normal - (sale - c.total_normal)).abs() < 1e-9);
                prop_assert!((c.profit_promo - (sale - c.total_promo)).abs() < 1e-9);
            }
        }
    }
}
