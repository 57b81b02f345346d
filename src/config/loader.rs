//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading cabin rate
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::CabinCategory;

use super::types::{
    CabinConfig, CatalogMetadata, CategoriesConfig, CategoryInfo, RateRow, RateTable, RatesConfig,
};

/// Loads and provides access to cabin rate configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory once
/// per process and provides methods to query categories and rates.
///
/// # Directory Structure
///
/// ```text
/// config/cabins/
/// ├── catalog.yaml     # Catalog metadata, currency and stay limit
/// ├── categories.yaml  # Cabin categories and their legacy aliases
/// └── rates.yaml       # Rate row per category
/// ```
///
/// # Example
///
/// ```no_run
/// use cabin_pricing::config::ConfigLoader;
/// use cabin_pricing::models::CabinCategory;
///
/// let loader = ConfigLoader::load("./config/cabins").unwrap();
/// let rates = loader.rates_for(CabinCategory::TieredA).unwrap();
/// println!("Weekday night: {}", rates.weekday_night_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CabinConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A rate row breaks the rate invariants (`InvalidRate`)
    /// - A described category has no rate row (`UnknownCategory`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let categories = Self::load_yaml::<CategoriesConfig>(&path.join("categories.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        let rate_table = RateTable::new(rates.rates)?;
        let config = CabinConfig::new(metadata, categories.categories, rate_table)?;

        info!(
            catalog = %config.catalog().name,
            version = %config.catalog().version,
            categories = config.rate_table().categories().len(),
            "Loaded cabin rate configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, for callers that inject rates
    /// from somewhere other than the filesystem.
    pub fn from_config(config: CabinConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying cabin configuration.
    pub fn config(&self) -> &CabinConfig {
        &self.config
    }

    /// Returns the catalog metadata.
    pub fn catalog(&self) -> &CatalogMetadata {
        self.config.catalog()
    }

    /// Returns the validated rate table.
    pub fn rate_table(&self) -> &RateTable {
        self.config.rate_table()
    }

    /// Gets the rates for a category.
    pub fn rates_for(&self, category: CabinCategory) -> EngineResult<&RateRow> {
        self.config.rate_table().rates_for(category)
    }

    /// Gets the description of a category.
    pub fn get_category(&self, category: CabinCategory) -> EngineResult<&CategoryInfo> {
        self.config
            .categories()
            .get(&category)
            .ok_or_else(|| EngineError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// Returns every `(alias, category)` pair used to recognise legacy
    /// cabin display names.
    pub fn legacy_aliases(&self) -> Vec<(String, CabinCategory)> {
        let mut aliases: Vec<(String, CabinCategory)> = self
            .config
            .categories()
            .iter()
            .flat_map(|(category, info)| {
                info.legacy_aliases
                    .iter()
                    .map(move |alias| (alias.clone(), *category))
            })
            .collect();
        aliases.sort();
        aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingScheme;

    fn config_path() -> &'static str {
        "./config/cabins"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.catalog().currency, "MXN");
        assert_eq!(loader.catalog().max_stay_nights, 365);
    }

    #[test]
    fn test_tiered_a_rates_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = loader.rates_for(CabinCategory::TieredA).unwrap();

        assert_eq!(rates.scheme, PricingScheme::Tiered);
        assert_eq!(rates.weekday_night_rate, 3000);
        assert_eq!(rates.weekend_night_rate, 5000);
        assert_eq!(rates.one_night_weekend_rate, 5000);
        assert_eq!(rates.two_night_friday_saturday_bundle_rate, 7000);
    }

    #[test]
    fn test_flat_rates_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = loader.rates_for(CabinCategory::Flat).unwrap();

        assert_eq!(rates.scheme, PricingScheme::Flat);
        assert_eq!(rates.weekday_night_rate, 1500);
    }

    #[test]
    fn test_every_category_is_described_and_priced() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        for category in CabinCategory::ALL {
            assert!(loader.get_category(category).is_ok(), "{}", category);
            assert!(loader.rates_for(category).is_ok(), "{}", category);
        }
    }

    #[test]
    fn test_legacy_aliases_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let aliases = loader.legacy_aliases();

        assert!(aliases.contains(&("tortuga".to_string(), CabinCategory::Flat)));
        assert!(aliases.contains(&("delfin".to_string(), CabinCategory::TieredA)));
        assert!(aliases.contains(&("tiburon".to_string(), CabinCategory::TieredB)));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("catalog.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
