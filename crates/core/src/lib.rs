//! `craftledger-core` — domain building blocks shared by the calculator and
//! product catalog crates.
//!
//! Pure domain primitives only; storage and presentation live elsewhere.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
