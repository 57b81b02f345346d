//! Occupancy models.
//!
//! This module contains the reservation records supplied by the external
//! reservation store, the per-cabin [`OccupiedDateSet`] snapshot built from
//! them, and the [`AvailabilityResult`] returned by the availability check.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{nights_between, stay_dates};
use crate::error::EngineResult;

/// The lifecycle state of a stored reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Booked and confirmed.
    Confirmed,
    /// Booked, awaiting confirmation or payment.
    Pending,
    /// Cancelled; frees its dates.
    Cancelled,
}

impl ReservationStatus {
    /// Returns true if a reservation in this state claims its dates.
    pub fn occupies_dates(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

/// A reservation as recorded by the reservation store.
///
/// # Example
///
/// ```
/// use cabin_pricing::models::{BookedReservation, ReservationStatus};
/// use chrono::NaiveDate;
///
/// let reservation = BookedReservation {
///     id: "res_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     status: ReservationStatus::Confirmed,
/// };
/// assert_eq!(reservation.occupied_dates().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedReservation {
    /// Unique identifier for the reservation.
    pub id: String,
    /// The check-in date (inclusive).
    pub start_date: NaiveDate,
    /// The checkout date (exclusive).
    pub end_date: NaiveDate,
    /// The reservation status.
    pub status: ReservationStatus,
}

impl BookedReservation {
    /// Returns the nights this reservation occupies, ignoring its status.
    pub fn occupied_dates(&self) -> EngineResult<Vec<NaiveDate>> {
        let nights = nights_between(self.start_date, self.end_date)?;
        stay_dates(self.start_date, nights)
    }
}

/// Who claims an occupied date.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Claim {
    /// A date known to be taken with no reservation attached.
    Anonymous,
    /// A date taken by the named reservation.
    Reservation(String),
}

/// A snapshot of the calendar dates already claimed for one cabin.
///
/// The snapshot is owned by the caller; the engine only reads it. Each date
/// remembers which reservations claim it so that a reservation being edited
/// can be left out of its own conflict check.
///
/// # Example
///
/// ```
/// use cabin_pricing::models::OccupiedDateSet;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let occupied = OccupiedDateSet::from_dates([friday]);
/// assert!(occupied.is_occupied(friday, None));
/// assert_eq!(occupied.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedDateSet {
    claims: BTreeMap<NaiveDate, Vec<Claim>>,
}

impl OccupiedDateSet {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot of dates with no reservation attribution.
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut set = Self::new();
        for date in dates {
            set.push_claim(date, Claim::Anonymous);
        }
        set
    }

    /// Creates a snapshot from stored reservations. Cancelled reservations
    /// contribute no dates.
    ///
    /// Fails with `InvalidRange` if a non-cancelled reservation has an end
    /// date that is not after its start date.
    pub fn from_reservations<'a, I>(reservations: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = &'a BookedReservation>,
    {
        let mut set = Self::new();
        for reservation in reservations {
            set.insert_reservation(reservation)?;
        }
        Ok(set)
    }

    /// Adds a reservation's nights to the snapshot, unless it is cancelled.
    pub fn insert_reservation(&mut self, reservation: &BookedReservation) -> EngineResult<()> {
        if !reservation.status.occupies_dates() {
            return Ok(());
        }
        for date in reservation.occupied_dates()? {
            self.push_claim(date, Claim::Reservation(reservation.id.clone()));
        }
        Ok(())
    }

    /// Marks a single date as taken with no reservation attribution.
    pub fn insert_date(&mut self, date: NaiveDate) {
        self.push_claim(date, Claim::Anonymous);
    }

    fn push_claim(&mut self, date: NaiveDate, claim: Claim) {
        let claims = self.claims.entry(date).or_default();
        if !claims.contains(&claim) {
            claims.push(claim);
        }
    }

    /// Returns true if `date` is claimed by anything other than the
    /// reservation named in `exclude_reservation_id`.
    ///
    /// Anonymous claims are never excluded.
    pub fn is_occupied(&self, date: NaiveDate, exclude_reservation_id: Option<&str>) -> bool {
        self.claims.get(&date).is_some_and(|claims| {
            claims.iter().any(|claim| match (claim, exclude_reservation_id) {
                (Claim::Reservation(id), Some(excluded)) => id != excluded,
                _ => true,
            })
        })
    }

    /// Returns every occupied date in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.claims.keys().copied()
    }

    /// Returns the number of distinct occupied dates.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns true if no date is occupied.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl FromIterator<NaiveDate> for OccupiedDateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self::from_dates(iter)
    }
}

/// The verdict of an availability check.
///
/// `available` is true exactly when `conflicting_dates` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// The cabin that was checked.
    pub cabin_id: String,
    /// Whether every night of the candidate stay is free.
    pub available: bool,
    /// Every candidate night that is already occupied, ascending.
    pub conflicting_dates: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn reservation(id: &str, start: &str, end: &str, status: ReservationStatus) -> BookedReservation {
        BookedReservation {
            id: id.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status,
        }
    }

    #[test]
    fn test_empty_set_has_no_occupied_dates() {
        let set = OccupiedDateSet::new();
        assert!(set.is_empty());
        assert!(!set.is_occupied(make_date("2026-01-16"), None));
    }

    #[test]
    fn test_from_reservations_excludes_checkout_day() {
        let set = OccupiedDateSet::from_reservations(&[reservation(
            "res_001",
            "2026-01-16",
            "2026-01-18",
            ReservationStatus::Confirmed,
        )])
        .unwrap();

        assert!(set.is_occupied(make_date("2026-01-16"), None));
        assert!(set.is_occupied(make_date("2026-01-17"), None));
        assert!(!set.is_occupied(make_date("2026-01-18"), None));
    }

    #[test]
    fn test_cancelled_reservations_occupy_nothing() {
        let set = OccupiedDateSet::from_reservations(&[reservation(
            "res_001",
            "2026-01-16",
            "2026-01-18",
            ReservationStatus::Cancelled,
        )])
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_pending_reservations_occupy_dates() {
        let set = OccupiedDateSet::from_reservations(&[reservation(
            "res_001",
            "2026-01-16",
            "2026-01-17",
            ReservationStatus::Pending,
        )])
        .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_exclusion_ignores_only_the_named_reservation() {
        let set = OccupiedDateSet::from_reservations(&[
            reservation("res_001", "2026-01-16", "2026-01-18", ReservationStatus::Confirmed),
            reservation("res_002", "2026-01-17", "2026-01-19", ReservationStatus::Confirmed),
        ])
        .unwrap();

        // Only res_001 claims the 16th
        assert!(!set.is_occupied(make_date("2026-01-16"), Some("res_001")));
        // Both claim the 17th
        assert!(set.is_occupied(make_date("2026-01-17"), Some("res_001")));
        // Only res_002 claims the 18th
        assert!(set.is_occupied(make_date("2026-01-18"), Some("res_001")));
    }

    #[test]
    fn test_anonymous_dates_are_never_excluded() {
        let set = OccupiedDateSet::from_dates([make_date("2026-01-16")]);
        assert!(set.is_occupied(make_date("2026-01-16"), Some("res_001")));
    }

    #[test]
    fn test_duplicate_claims_collapse() {
        let mut set = OccupiedDateSet::new();
        set.insert_date(make_date("2026-01-16"));
        set.insert_date(make_date("2026-01-16"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_invalid_reservation_range_is_rejected() {
        let result = OccupiedDateSet::from_reservations(&[reservation(
            "res_bad",
            "2026-01-18",
            "2026-01-16",
            ReservationStatus::Confirmed,
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dates_are_sorted() {
        let set: OccupiedDateSet = [make_date("2026-01-20"), make_date("2026-01-02")]
            .into_iter()
            .collect();
        let dates: Vec<NaiveDate> = set.dates().collect();
        assert_eq!(dates, vec![make_date("2026-01-02"), make_date("2026-01-20")]);
    }

    #[test]
    fn test_reservation_status_deserializes_snake_case() {
        let status: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
    }
}
