//! Calendar date arithmetic for stays.
//!
//! Every date here is a [`NaiveDate`]: a year, month and day with no time
//! or timezone attached. Night `i` of a stay falls on `start_date + i` and
//! the checkout date is never occupied.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a single night is priced in stays of three or more nights.
///
/// Monday through Thursday nights are weekday nights; Friday, Saturday and
/// Sunday nights are all weekend nights.
///
/// # Example
///
/// ```
/// use cabin_pricing::calculation::NightType;
/// use chrono::NaiveDate;
///
/// // 2026-01-16 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(NightType::of(friday), NightType::Weekend);
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(NightType::of(thursday), NightType::Weekday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightType {
    /// Monday through Thursday.
    Weekday,
    /// Friday, Saturday or Sunday.
    Weekend,
}

impl NightType {
    /// Classifies the night starting on `date`.
    pub fn of(date: NaiveDate) -> Self {
        match day_of_week(date) {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => NightType::Weekday,
            Weekday::Fri | Weekday::Sat | Weekday::Sun => NightType::Weekend,
        }
    }
}

impl std::fmt::Display for NightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NightType::Weekday => write!(f, "Weekday"),
            NightType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Returns the day of the week of a calendar date.
pub fn day_of_week(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Returns true when a single-night stay starting on `date` gets the
/// one-night weekend rate (Friday or Saturday).
pub fn is_one_night_weekend(date: NaiveDate) -> bool {
    matches!(day_of_week(date), Weekday::Fri | Weekday::Sat)
}

/// Adds whole days to a date, failing with `InvalidRange` past the end of
/// the representable calendar.
pub fn add_days(date: NaiveDate, days: u32) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            EngineError::invalid_range(format!(
                "{} plus {} days is outside the supported calendar",
                date, days
            ))
        })
}

/// Produces the ordered sequence of occupied dates for a stay.
///
/// # Arguments
///
/// * `start_date` - The check-in date (first occupied night)
/// * `nights` - The number of nights, at least 1
///
/// # Returns
///
/// `nights` dates, `start_date + i` for `i` in `0..nights`. The checkout
/// date is not included.
///
/// # Example
///
/// ```
/// use cabin_pricing::calculation::stay_dates;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
/// let dates = stay_dates(start, 3).unwrap();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
///
/// assert!(stay_dates(start, 0).is_err());
/// ```
pub fn stay_dates(start_date: NaiveDate, nights: u32) -> EngineResult<Vec<NaiveDate>> {
    if nights == 0 {
        return Err(EngineError::invalid_range("a stay must be at least 1 night"));
    }

    // Reject ranges whose checkout falls off the calendar before allocating.
    add_days(start_date, nights)?;

    Ok(start_date.iter_days().take(nights as usize).collect())
}

/// Counts the nights in the half-open range `[start_date, end_date)`.
///
/// Fails with `InvalidRange` when `end_date` is not after `start_date`.
pub fn nights_between(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<u32> {
    let nights = (end_date - start_date).num_days();
    if nights <= 0 {
        return Err(EngineError::invalid_range(format!(
            "end date {} must be after start date {}",
            end_date, start_date
        )));
    }

    u32::try_from(nights).map_err(|_| {
        EngineError::invalid_range(format!("{} nights is too long a stay", nights))
    })
}

/// Rejects stays longer than `max_nights`, returning `nights` otherwise.
///
/// Every night of a stay is materialised as a date, so callers accepting
/// untrusted ranges bound them here before enumerating.
pub fn check_stay_length(nights: u32, max_nights: u32) -> EngineResult<u32> {
    if nights > max_nights {
        return Err(EngineError::invalid_range(format!(
            "{} nights exceeds the maximum stay of {} nights",
            nights, max_nights
        )));
    }
    Ok(nights)
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// The input must be exactly four year digits, two month digits and two
/// day digits. Signed or extended years and surrounding whitespace are
/// rejected.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(EngineError::invalid_range(format!(
            "'{}' is not a YYYY-MM-DD date",
            value
        )));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        EngineError::invalid_range(format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
    })
}
