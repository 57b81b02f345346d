//! Calculation logic for the cabin pricing engine.
//!
//! This module contains the calendar arithmetic shared by every operation,
//! the stay price calculator and the availability checker. All functions
//! are pure: they read their inputs and return a value.

mod availability;
mod calendar;
mod price;

pub use availability::check_availability;
pub use calendar::{
    DATE_FORMAT, NightType, add_days, check_stay_length, day_of_week, is_one_night_weekend,
    nights_between, parse_date, stay_dates,
};
pub use price::{compute_price, compute_stay_price};
