//! Configuration loading and management for the cabin pricing engine.
//!
//! This module provides functionality to load the rate table from YAML
//! files, including catalog metadata, category descriptions and the rate
//! row for each category.
//!
//! # Example
//!
//! ```no_run
//! use cabin_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cabins").unwrap();
//! println!("Loaded catalog: {}", config.catalog().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CabinConfig, CatalogMetadata, CategoriesConfig, CategoryInfo, DEFAULT_MAX_STAY_NIGHTS,
    PricingScheme, RateRow, RateTable, RatesConfig,
};
