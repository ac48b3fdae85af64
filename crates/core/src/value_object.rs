//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attributes.
/// Cost breakdowns, yarn types and extras are values: two breakdowns with the
/// same numbers are interchangeable.
///
/// To "modify" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
