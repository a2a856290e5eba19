//! Catalog handlers.

mod seed_catalog;

pub use seed_catalog::{SeedCatalogHandler, SeedCatalogResult};
