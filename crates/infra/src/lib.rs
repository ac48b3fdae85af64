//! Infrastructure layer: persistence, configuration and the catalog service.

pub mod catalog_service;
pub mod config;
pub mod product_store;

pub use catalog_service::{CatalogService, ServiceError};
pub use config::StoreConfig;
pub use product_store::{InMemoryProductStore, JsonFileProductStore, ProductStore, StoreError};
