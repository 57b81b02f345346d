//! Configuration types for cabin pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`RateTable`] the price calculator reads from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::CabinCategory;

/// Metadata about the rental catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The business or property name.
    pub name: String,
    /// The version or effective date of the rate configuration.
    pub version: String,
    /// ISO 4217 code of the currency all rates are expressed in.
    pub currency: String,
    /// The longest stay, in nights, the HTTP surface will price or check.
    #[serde(default = "default_max_stay_nights")]
    pub max_stay_nights: u32,
}

/// Maximum stay length used when `catalog.yaml` does not set one.
pub const DEFAULT_MAX_STAY_NIGHTS: u32 = 365;

fn default_max_stay_nights() -> u32 {
    DEFAULT_MAX_STAY_NIGHTS
}

/// Descriptive information about a cabin category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInfo {
    /// The human-readable name of the category.
    pub name: String,
    /// A description of the category.
    pub description: String,
    /// Display-name fragments that identified this category in legacy
    /// cabin records. Only used by the migration shim.
    #[serde(default)]
    pub legacy_aliases: Vec<String>,
}

/// Categories configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Map of category to category details.
    pub categories: HashMap<CabinCategory, CategoryInfo>,
}

/// How a rate row turns nights into a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingScheme {
    /// Every night costs the weekday rate.
    Flat,
    /// One-night, two-night and longer stays each follow their own
    /// day-of-week rule.
    Tiered,
}

/// The rates for one cabin category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow {
    /// Which pricing rules apply to this row.
    pub scheme: PricingScheme,
    /// Nightly rate for weekday nights.
    pub weekday_night_rate: u64,
    /// Nightly rate for weekend nights in stays of three or more nights.
    pub weekend_night_rate: u64,
    /// Price of a single night starting Friday or Saturday.
    pub one_night_weekend_rate: u64,
    /// Price of a two-night stay from Friday to Sunday morning.
    pub two_night_friday_saturday_bundle_rate: u64,
}

impl RateRow {
    /// Checks the row invariants: every rate is positive and the weekend
    /// rate is not below the weekday rate.
    pub fn validate(&self, category: CabinCategory) -> EngineResult<()> {
        let rates = [
            ("weekday_night_rate", self.weekday_night_rate),
            ("weekend_night_rate", self.weekend_night_rate),
            ("one_night_weekend_rate", self.one_night_weekend_rate),
            (
                "two_night_friday_saturday_bundle_rate",
                self.two_night_friday_saturday_bundle_rate,
            ),
        ];

        if let Some((field, _)) = rates.iter().find(|(_, rate)| *rate == 0) {
            return Err(EngineError::InvalidRate {
                category: category.to_string(),
                message: format!("{} must be greater than zero", field),
            });
        }

        if self.weekend_night_rate < self.weekday_night_rate {
            return Err(EngineError::InvalidRate {
                category: category.to_string(),
                message: format!(
                    "weekend_night_rate {} is below weekday_night_rate {}",
                    self.weekend_night_rate, self.weekday_night_rate
                ),
            });
        }

        Ok(())
    }
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Map of category to its rate row.
    pub rates: HashMap<CabinCategory, RateRow>,
}

/// A validated lookup table from cabin category to rate row.
///
/// The table is immutable once built and is shared read-only by every
/// pricing call.
///
/// # Example
///
/// ```
/// use cabin_pricing::config::{PricingScheme, RateRow, RateTable};
/// use cabin_pricing::models::CabinCategory;
///
/// let table = RateTable::new([(
///     CabinCategory::Flat,
///     RateRow {
///         scheme: PricingScheme::Flat,
///         weekday_night_rate: 1500,
///         weekend_night_rate: 1500,
///         one_night_weekend_rate: 1500,
///         two_night_friday_saturday_bundle_rate: 3000,
///     },
/// )])
/// .unwrap();
///
/// assert_eq!(table.rates_for(CabinCategory::Flat).unwrap().weekday_night_rate, 1500);
/// assert!(table.rates_for(CabinCategory::TieredA).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rows: HashMap<CabinCategory, RateRow>,
}

impl RateTable {
    /// Builds a rate table, validating every row.
    pub fn new<I>(rows: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (CabinCategory, RateRow)>,
    {
        let rows: HashMap<CabinCategory, RateRow> = rows.into_iter().collect();
        for (category, row) in &rows {
            row.validate(*category)?;
        }
        Ok(Self { rows })
    }

    /// Looks up the rates for a category.
    ///
    /// Fails with `UnknownCategory` if the category has no row.
    pub fn rates_for(&self, category: CabinCategory) -> EngineResult<&RateRow> {
        self.rows
            .get(&category)
            .ok_or_else(|| EngineError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// Returns the categories that have rates, in a stable order.
    pub fn categories(&self) -> Vec<CabinCategory> {
        let mut categories: Vec<CabinCategory> = self.rows.keys().copied().collect();
        categories.sort();
        categories
    }
}

/// The complete cabin configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CabinConfig {
    /// Catalog metadata.
    metadata: CatalogMetadata,
    /// Category descriptions.
    categories: HashMap<CabinCategory, CategoryInfo>,
    /// Validated rates.
    rate_table: RateTable,
}

impl CabinConfig {
    /// Creates a new CabinConfig from its component parts.
    ///
    /// Every described category must have a rate row, and the catalog must
    /// allow stays of at least one night.
    pub fn new(
        metadata: CatalogMetadata,
        categories: HashMap<CabinCategory, CategoryInfo>,
        rate_table: RateTable,
    ) -> EngineResult<Self> {
        if metadata.max_stay_nights == 0 {
            return Err(EngineError::ConfigParseError {
                path: "catalog.yaml".to_string(),
                message: "max_stay_nights must be at least 1".to_string(),
            });
        }
        for category in categories.keys() {
            rate_table.rates_for(*category)?;
        }
        Ok(Self {
            metadata,
            categories,
            rate_table,
        })
    }

    /// Returns the catalog metadata.
    pub fn catalog(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all category descriptions.
    pub fn categories(&self) -> &HashMap<CabinCategory, CategoryInfo> {
        &self.categories
    }

    /// Returns the validated rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }
}
