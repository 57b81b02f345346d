//! Price result models.
//!
//! This module contains the [`PriceResult`] returned by the price
//! calculator together with its itemised [`PriceLine`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CabinCategory;

/// The branch of the pricing rules that priced a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// Flat-scheme stay: weekday rate times nights.
    FlatNightly,
    /// Tiered one-night stay starting Sunday through Thursday.
    OneNightWeekday,
    /// Tiered one-night stay starting Friday or Saturday.
    OneNightWeekend,
    /// Tiered two-night Friday to Saturday stay at the bundle rate.
    FridaySaturdayBundle,
    /// Tiered two-night stay that is not a Friday to Saturday bundle.
    TwoNightWeekday,
    /// Tiered stay of three or more nights priced night by night.
    PerNight,
}

/// Which rate a price line was charged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    /// The weekday nightly rate.
    WeekdayNight,
    /// The weekend nightly rate.
    WeekendNight,
    /// The one-night weekend rate.
    OneNightWeekend,
    /// The two-night Friday to Saturday bundle rate.
    FridaySaturdayBundle,
}

/// A single itemised charge within a price.
///
/// Per-night rules produce one line per night. Bundle rates produce one
/// line covering every night of the bundle.
///
/// # Example
///
/// ```
/// use cabin_pricing::models::{PriceLine, RateKind};
/// use chrono::NaiveDate;
///
/// let line = PriceLine {
///     date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     nights: 2,
///     kind: RateKind::FridaySaturdayBundle,
///     rate: 7000,
///     amount: 7000,
/// };
/// assert_eq!(line.amount, 7000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLine {
    /// The first night this line covers.
    pub date: NaiveDate,
    /// The number of nights this line covers.
    pub nights: u32,
    /// The rate this line was charged at.
    pub kind: RateKind,
    /// The rate value in whole currency units.
    pub rate: u64,
    /// The amount charged for this line in whole currency units.
    pub amount: u64,
}

/// The price of a stay.
///
/// `total_price` always equals the sum of `lines[..].amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResult {
    /// The category the stay was priced for.
    pub category: CabinCategory,
    /// The check-in date.
    pub start_date: NaiveDate,
    /// The number of nights priced.
    pub nights: u32,
    /// The total price in whole currency units.
    pub total_price: u64,
    /// The pricing branch that applied.
    pub rule: PricingRule,
    /// The itemised charges.
    pub lines: Vec<PriceLine>,
}
