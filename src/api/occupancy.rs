//! Occupancy source for the HTTP surface.
//!
//! Reservations are owned by an external store. The API reads a per-cabin
//! snapshot through the [`OccupancySource`] trait; [`InMemoryOccupancy`] is
//! a simple implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{BookedReservation, OccupiedDateSet};

/// Provides occupied-date snapshots for cabins.
pub trait OccupancySource: Send + Sync {
    /// Returns a snapshot of the dates occupied for `cabin_id`.
    ///
    /// A cabin with no reservations yields an empty set.
    fn occupied_dates(&self, cabin_id: &str) -> EngineResult<OccupiedDateSet>;
}

/// An in-memory reservation store keyed by cabin.
#[derive(Debug, Default)]
pub struct InMemoryOccupancy {
    reservations: RwLock<HashMap<String, Vec<BookedReservation>>>,
}

impl InMemoryOccupancy {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reservation for a cabin.
    pub fn record(&self, cabin_id: impl Into<String>, reservation: BookedReservation) -> EngineResult<()> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        reservations
            .entry(cabin_id.into())
            .or_default()
            .push(reservation);
        Ok(())
    }
}

impl OccupancySource for InMemoryOccupancy {
    fn occupied_dates(&self, cabin_id: &str) -> EngineResult<OccupiedDateSet> {
        let reservations = self.reservations.read().map_err(|_| poisoned())?;
        match reservations.get(cabin_id) {
            Some(booked) => OccupiedDateSet::from_reservations(booked),
            None => Ok(OccupiedDateSet::new()),
        }
    }
}

fn poisoned() -> EngineError {
    EngineError::CalculationError {
        message: "occupancy store lock poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_unknown_cabin_has_empty_snapshot() {
        let store = InMemoryOccupancy::new();
        assert!(store.occupied_dates("cabin_x").unwrap().is_empty());
    }

    #[test]
    fn test_recorded_reservations_are_per_cabin() {
        let store = InMemoryOccupancy::new();
        store
            .record(
                "cabin_1",
                BookedReservation {
                    id: "res_1".to_string(),
                    start_date: make_date("2026-01-16"),
                    end_date: make_date("2026-01-18"),
                    status: ReservationStatus::Confirmed,
                },
            )
            .unwrap();

        assert_eq!(store.occupied_dates("cabin_1").unwrap().len(), 2);
        assert!(store.occupied_dates("cabin_2").unwrap().is_empty());
    }
}
