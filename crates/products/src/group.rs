//! Display groups: records sharing (name, yarn, sale price) folded together.

use std::collections::HashMap;

use serde::Serialize;

use craftledger_core::ProductId;

use crate::record::ProductRecord;

/// Grouping key. Structural, so names containing any character group safely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    name: String,
    yarn_type: String,
    sale_price: PriceKey,
}

/// Sale price keyed by bit pattern, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PriceKey(u64);

impl PriceKey {
    fn new(price: f64) -> Self {
        let price = if price == 0.0 { 0.0 } else { price };
        Self(price.to_bits())
    }
}

impl GroupKey {
    pub fn new(name: impl Into<String>, yarn_type: impl Into<String>, sale_price: f64) -> Self {
        Self {
            name: name.into(),
            yarn_type: yarn_type.into(),
            sale_price: PriceKey::new(sale_price),
        }
    }

    pub fn of(record: &ProductRecord) -> Self {
        Self::new(record.name.as_str(), record.yarn_type.as_str(), record.sale_price())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn yarn_type(&self) -> &str {
        &self.yarn_type
    }

    pub fn sale_price(&self) -> f64 {
        f64::from_bits(self.sale_price.0)
    }
}

/// One colour/hook combination inside a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantView {
    pub id: ProductId,
    pub color: Vec<String>,
    pub hook: String,
    pub stock: u32,
}

impl From<&ProductRecord> for VariantView {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            color: record.color.clone(),
            hook: record.hook.clone(),
            stock: record.stock,
        }
    }
}

/// Variants sharing a name, yarn and sale price.
///
/// Cost and profit figures come from the first record seen for the key; the
/// catalog assumes every record under one key was priced identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub name: String,
    pub yarn_type: String,
    pub sale_price: f64,
    pub total_normal: f64,
    pub total_promo: f64,
    pub profit_normal: f64,
    pub profit_promo: f64,
    pub variants: Vec<VariantView>,
}

impl ProductGroup {
    fn seed(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            yarn_type: record.yarn_type.clone(),
            sale_price: record.sale_price(),
            total_normal: record.costs.total_normal,
            total_promo: record.costs.total_promo,
            profit_normal: record.costs.profit_normal,
            profit_promo: record.costs.profit_promo,
            variants: Vec::new(),
        }
    }

    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.name.as_str(), self.yarn_type.as_str(), self.sale_price)
    }

    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| u64::from(v.stock)).sum()
    }

    pub fn variant_ids(&self) -> Vec<ProductId> {
        self.variants.iter().map(|v| v.id).collect()
    }

    /// Every colour used by any variant, sorted and de-duplicated.
    pub fn colors(&self) -> Vec<String> {
        let mut colors: Vec<String> = self
            .variants
            .iter()
            .flat_map(|v| v.color.iter().cloned())
            .collect();
        colors.sort();
        colors.dedup();
        colors
    }
}

/// Partition records into display groups.
///
/// Groups appear in first-seen key order; variants keep list order.
pub fn group_products_by_key(products: &[ProductRecord]) -> Vec<ProductGroup> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<ProductGroup> = Vec::new();

    for record in products {
        let slot = *index.entry(GroupKey::of(record)).or_insert_with(|| {
            groups.push(ProductGroup::seed(record));
            groups.len() - 1
        });
        groups[slot].variants.push(VariantView::from(record));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewProduct, create_product_record};
    use chrono::Utc;
    use craftledger_calculator::ProductInput;

    fn record(name: &str, yarn: &str, sale_price: f64, color: &str, stock: u32) -> ProductRecord {
        let draft = NewProduct {
            name: Some(name.to_string()),
            color: vec![color.to_string()],
            hook: Some("3mm".to_string()),
            input: ProductInput {
                yarn_type: yarn.to_string(),
                yarn_weight: 40.0,
                total_weight: 60.0,
                hours: 1.5,
                sale_price,
                ..ProductInput::default()
            },
            stock: Some(stock),
            sold: None,
        };
        create_product_record(&draft, ProductId::new(), Utc::now())
    }

    #[test]
    fn groups_by_name_yarn_and_price() {
        let products = vec![
            record("Bunny", "baby-snuggle", 20.0, "pink", 1),
            record("Bear", "baby-snuggle", 20.0, "brown", 2),
            record("Bunny", "baby-snuggle", 20.0, "white", 3),
            record("Bunny", "honey-bunny", 20.0, "pink", 1),
            record("Bunny", "baby-snuggle", 25.0, "pink", 1),
        ];

        let groups = group_products_by_key(&products);
        assert_eq!(groups.len(), 4);

        let bunny = &groups[0];
        assert_eq!(bunny.name, "Bunny");
        assert_eq!(bunny.variants.len(), 2);
        assert_eq!(bunny.variants[0].id, products[0].id);
        assert_eq!(bunny.variants[1].id, products[2].id);
        assert_eq!(bunny.total_stock(), 4);
        assert_eq!(bunny.colors(), vec!["pink", "white"]);
        assert_eq!(bunny.total_normal, products[0].costs.total_normal);

        assert_eq!(groups[1].name, "Bear");
        assert_eq!(groups[2].yarn_type, "honey-bunny");
        assert_eq!(groups[3].sale_price, 25.0);
    }

    #[test]
    fn first_record_seeds_shared_fields() {
        let mut a = record("Bunny", "baby-snuggle", 20.0, "pink", 1);
        let b = record("Bunny", "baby-snuggle", 20.0, "white", 1);
        a.costs.total_normal = 99.0;

        let groups = group_products_by_key(&[a, b]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].total_normal, 99.0);
    }

    #[test]
    fn separator_characters_in_names_do_not_collide() {
        let a = record("a|b", "c", 1.0, "red", 1);
        let b = record("a", "b|c", 1.0, "red", 1);
        assert_ne!(GroupKey::of(&a), GroupKey::of(&b));
        assert_eq!(group_products_by_key(&[a, b]).len(), 2);
    }

    #[test]
    fn negative_zero_price_groups_with_zero() {
        assert_eq!(GroupKey::new("x", "y", -0.0), GroupKey::new("x", "y", 0.0));
    }

    #[test]
    fn key_round_trips_through_group() {
        let r = record("Bunny", "baby-snuggle", 12.5, "pink", 1);
        let groups = group_products_by_key(std::slice::from_ref(&r));
        assert_eq!(groups[0].key(), GroupKey::of(&r));
        assert_eq!(groups[0].key().sale_price(), 12.5);
        assert_eq!(groups[0].variant_ids(), vec![r.id]);
    }

    #[test]
    fn empty_list_has_no_groups() {
        assert!(group_products_by_key(&[]).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// N records sharing a key yield one group with N variants, in any order.
            #[test]
            fn shared_key_yields_single_group_under_permutation(
                colors in prop::collection::vec("[a-z]{1,8}", 1..20),
                shuffle in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
            ) {
                let mut products: Vec<ProductRecord> = colors
                    .iter()
                    .map(|c| record("Bunny", "baby-snuggle", 20.0, c, 1))
                    .collect();

                for (i, idx) in shuffle.iter().enumerate() {
                    let len = products.len();
                    products.swap(i % len, idx.index(len));
                }

                let groups = group_products_by_key(&products);
                prop_assert_eq!(groups.len(), 1);
                prop_assert_eq!(groups[0].variants.len(), products.len());

                let mut expected: Vec<ProductId> = products.iter().map(|p| p.id).collect();
                let mut actual = groups[0].variant_ids();
                expected.sort();
                actual.sort();
                prop_assert_eq!(actual, expected);
            }

            /// Every record lands in exactly one variant slot.
            #[test]
            fn grouping_preserves_every_record(
                specs in prop::collection::vec((0usize..3, 0usize..2, 0u32..5), 0..30),
            ) {
                let names = ["Bunny", "Bear", "Whale"];
                let prices = [10.0, 20.0];
                let products: Vec<ProductRecord> = specs
                    .iter()
                    .map(|(n, p, s)| record(names[*n], "baby-snuggle", prices[*p], "red", *s))
                    .collect();

                let groups = group_products_by_key(&products);
                let variant_count: usize = groups.iter().map(|g| g.variants.len()).sum();
                let stock: u64 = groups.iter().map(ProductGroup::total_stock).sum();

                prop_assert_eq!(variant_count, products.len());
                prop_assert_eq!(stock, products.iter().map(|p| u64::from(p.stock)).sum::<u64>());
            }
        }
    }
}
