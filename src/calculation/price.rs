//! Stay price calculation.
//!
//! This module prices a stay from its category's rate row. Flat rows
//! charge the weekday rate for every night. Tiered rows follow one of three
//! rules depending on the length of the stay:
//!
//! - 1 night: the one-night weekend rate when starting Friday or Saturday,
//!   otherwise the weekday rate.
//! - 2 nights: the bundle rate for Friday into Saturday, otherwise twice the
//!   weekday rate.
//! - 3 or more nights: each Monday to Thursday night at the weekday rate,
//!   each Friday, Saturday or Sunday night at the weekend rate.
//!
//! All arithmetic is in whole currency units on `u64` and is overflow
//! checked.

use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::config::{PricingScheme, RateRow, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{CabinCategory, PriceLine, PriceResult, PricingRule, RateKind, Stay};

use super::calendar::{NightType, add_days, day_of_week, is_one_night_weekend, stay_dates};

/// Prices a stay.
///
/// # Arguments
///
/// * `table` - The rate table to read rates from
/// * `category` - The cabin category
/// * `start_date` - The check-in date
/// * `nights` - The number of nights, at least 1
///
/// # Returns
///
/// A [`PriceResult`] whose `total_price` is the sum of its lines, or:
/// - `UnknownCategory` if the table has no row for `category`
/// - `InvalidRange` if `nights` is 0 or the stay leaves the calendar
/// - `CalculationError` if the total overflows
///
/// # Example
///
/// ```
/// use cabin_pricing::calculation::compute_price;
/// use cabin_pricing::config::{PricingScheme, RateRow, RateTable};
/// use cabin_pricing::models::{CabinCategory, PricingRule};
/// use chrono::NaiveDate;
///
/// let table = RateTable::new([(
///     CabinCategory::TieredA,
///     RateRow {
///         scheme: PricingScheme::Tiered,
///         weekday_night_rate: 3000,
///         weekend_night_rate: 5000,
///         one_night_weekend_rate: 5000,
///         two_night_friday_saturday_bundle_rate: 7000,
///     },
/// )])
/// .unwrap();
///
/// // 2026-01-16 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let result = compute_price(&table, CabinCategory::TieredA, friday, 2).unwrap();
/// assert_eq!(result.total_price, 7000);
/// assert_eq!(result.rule, PricingRule::FridaySaturdayBundle);
/// ```
pub fn compute_price(
    table: &RateTable,
    category: CabinCategory,
    start_date: NaiveDate,
    nights: u32,
) -> EngineResult<PriceResult> {
    let rates = table.rates_for(category)?;
    let dates = stay_dates(start_date, nights)?;

    let (rule, lines) = match rates.scheme {
        PricingScheme::Flat => (PricingRule::FlatNightly, flat_lines(rates, &dates)),
        PricingScheme::Tiered => match nights {
            1 => price_one_night(rates, start_date),
            2 => price_two_nights(rates, start_date)?,
            _ => (PricingRule::PerNight, per_night_lines(rates, &dates)),
        },
    };

    let total_price = lines.iter().try_fold(0u64, |total, line| {
        total.checked_add(line.amount).ok_or_else(|| overflow(category, nights))
    })?;

    debug!(
        category = %category,
        start_date = %start_date,
        nights,
        rule = ?rule,
        total_price,
        "Priced stay"
    );

    Ok(PriceResult {
        category,
        start_date,
        nights,
        total_price,
        rule,
        lines,
    })
}

/// Prices a [`Stay`]. See [`compute_price`].
pub fn compute_stay_price(table: &RateTable, stay: &Stay) -> EngineResult<PriceResult> {
    compute_price(table, stay.category, stay.start_date, stay.nights)
}

fn overflow(category: CabinCategory, nights: u32) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "price of {} nights for category '{}' overflows",
            nights, category
        ),
    }
}

fn night_line(date: NaiveDate, kind: RateKind, rate: u64) -> PriceLine {
    PriceLine {
        date,
        nights: 1,
        kind,
        rate,
        amount: rate,
    }
}

fn flat_lines(rates: &RateRow, dates: &[NaiveDate]) -> Vec<PriceLine> {
    dates
        .iter()
        .map(|date| night_line(*date, RateKind::WeekdayNight, rates.weekday_night_rate))
        .collect()
}

fn price_one_night(rates: &RateRow, start_date: NaiveDate) -> (PricingRule, Vec<PriceLine>) {
    if is_one_night_weekend(start_date) {
        (
            PricingRule::OneNightWeekend,
            vec![night_line(
                start_date,
                RateKind::OneNightWeekend,
                rates.one_night_weekend_rate,
            )],
        )
    } else {
        (
            PricingRule::OneNightWeekday,
            vec![night_line(
                start_date,
                RateKind::WeekdayNight,
                rates.weekday_night_rate,
            )],
        )
    }
}

fn price_two_nights(
    rates: &RateRow,
    start_date: NaiveDate,
) -> EngineResult<(PricingRule, Vec<PriceLine>)> {
    let second_night = add_days(start_date, 1)?;

    if day_of_week(start_date) == Weekday::Fri && day_of_week(second_night) == Weekday::Sat {
        let bundle = rates.two_night_friday_saturday_bundle_rate;
        return Ok((
            PricingRule::FridaySaturdayBundle,
            vec![PriceLine {
                date: start_date,
                nights: 2,
                kind: RateKind::FridaySaturdayBundle,
                rate: bundle,
                amount: bundle,
            }],
        ));
    }

    // Any other two-night stay, weekend nights included, is two weekday nights.
    Ok((
        PricingRule::TwoNightWeekday,
        vec![
            night_line(start_date, RateKind::WeekdayNight, rates.weekday_night_rate),
            night_line(second_night, RateKind::WeekdayNight, rates.weekday_night_rate),
        ],
    ))
}

fn per_night_lines(rates: &RateRow, dates: &[NaiveDate]) -> Vec<PriceLine> {
    dates
        .iter()
        .map(|date| match NightType::of(*date) {
            NightType::Weekday => {
                night_line(*date, RateKind::WeekdayNight, rates.weekday_night_rate)
            }
            NightType::Weekend => {
                night_line(*date, RateKind::WeekendNight, rates.weekend_night_rate)
            }
        })
        .collect()
}
