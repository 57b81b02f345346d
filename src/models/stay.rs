//! Stay model.
//!
//! A [`Stay`] is a candidate booking: a category, a check-in date and a
//! number of nights. It is computed per request and never persisted here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{add_days, nights_between, stay_dates};
use crate::error::{EngineError, EngineResult};

use super::CabinCategory;

/// A candidate multi-night stay.
///
/// Deserialized values pass through [`Stay::new`], so a zero-night or
/// off-calendar stay is rejected while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedStay")]
pub struct Stay {
    /// The pricing category of the cabin.
    pub category: CabinCategory,
    /// The check-in date (first occupied night).
    pub start_date: NaiveDate,
    /// The number of nights, at least 1.
    pub nights: u32,
}

#[derive(Deserialize)]
struct UncheckedStay {
    category: CabinCategory,
    start_date: NaiveDate,
    nights: u32,
}

impl TryFrom<UncheckedStay> for Stay {
    type Error = EngineError;

    fn try_from(raw: UncheckedStay) -> EngineResult<Self> {
        Stay::new(raw.category, raw.start_date, raw.nights)
    }
}

impl Stay {
    /// Creates a stay, validating that it spans at least one night on the
    /// supported calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use cabin_pricing::models::{CabinCategory, Stay};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
    /// let stay = Stay::new(CabinCategory::TieredA, start, 2).unwrap();
    /// assert_eq!(stay.end_date().unwrap(), NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
    ///
    /// assert!(Stay::new(CabinCategory::TieredA, start, 0).is_err());
    /// ```
    pub fn new(category: CabinCategory, start_date: NaiveDate, nights: u32) -> EngineResult<Self> {
        // Validates nights >= 1 and that checkout is representable.
        stay_dates(start_date, nights)?;
        Ok(Self {
            category,
            start_date,
            nights,
        })
    }

    /// Creates a stay from a check-in date and an exclusive checkout date.
    pub fn from_range(
        category: CabinCategory,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Self> {
        let nights = nights_between(start_date, end_date)?;
        Self::new(category, start_date, nights)
    }

    /// Returns the checkout date. It is not an occupied night.
    ///
    /// Fails with `InvalidRange` for a hand-built stay of zero nights or one
    /// whose checkout falls off the calendar.
    pub fn end_date(&self) -> EngineResult<NaiveDate> {
        if self.nights == 0 {
            return Err(EngineError::invalid_range("a stay must be at least 1 night"));
        }
        add_days(self.start_date, self.nights)
    }

    /// Returns the occupied dates of the stay in order.
    pub fn dates(&self) -> EngineResult<Vec<NaiveDate>> {
        stay_dates(self.start_date, self.nights)
    }
}
