//! Core data models for the cabin pricing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category;
mod occupancy;
mod price_result;
mod stay;

pub use category::CabinCategory;
pub use occupancy::{AvailabilityResult, BookedReservation, OccupiedDateSet, ReservationStatus};
pub use price_result::{PriceLine, PriceResult, PricingRule, RateKind};
pub use stay::Stay;
