//! Duplicate detection for re-added product variants.

use crate::record::ProductRecord;

/// Colour lists are equal as sets: same length, and every colour of each
/// list appears in the other. Order-independent, case-sensitive.
pub fn same_color_set(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|c| b.contains(c)) && b.iter().all(|c| a.contains(c))
}

fn is_same_variant(candidate: &ProductRecord, existing: &ProductRecord) -> bool {
    existing.name == candidate.name
        && existing.hook == candidate.hook
        && existing.yarn_type == candidate.yarn_type
        && existing.sale_price() == candidate.sale_price()
        && same_color_set(&existing.color, &candidate.color)
}

/// First record in `existing` that is logically the same variant as
/// `candidate` (name, hook, yarn, sale price and colour set all match).
pub fn find_duplicate_product<'a>(
    candidate: &ProductRecord,
    existing: &'a [ProductRecord],
) -> Option<&'a ProductRecord> {
    existing.iter().find(|p| is_same_variant(candidate, p))
}
