//! Availability checking.
//!
//! A candidate stay is available when none of its nights is already
//! occupied for the cabin. The checkout day is not a night of the stay and
//! is never tested.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AvailabilityResult, OccupiedDateSet};

use super::calendar::stay_dates;

/// Checks a candidate stay against a cabin's occupied dates.
///
/// Every conflicting night is collected so callers can show the full list
/// of unavailable dates.
///
/// # Arguments
///
/// * `cabin_id` - The cabin being checked
/// * `start_date` - The candidate check-in date
/// * `nights` - The number of candidate nights, at least 1
/// * `occupied` - A snapshot of the cabin's occupied dates
/// * `exclude_reservation_id` - A reservation whose own dates should not
///   count as conflicts, typically the booking being edited
///
/// # Returns
///
/// An [`AvailabilityResult`]. The only error is `InvalidRange` from an
/// invalid candidate range; an empty snapshot is always available.
///
/// # Example
///
/// ```
/// use cabin_pricing::calculation::check_availability;
/// use cabin_pricing::models::OccupiedDateSet;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let occupied = OccupiedDateSet::from_dates([saturday]);
///
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let result = check_availability("cabin_7", friday, 3, &occupied, None).unwrap();
/// assert!(!result.available);
/// assert_eq!(result.conflicting_dates, vec![saturday]);
/// ```
pub fn check_availability(
    cabin_id: &str,
    start_date: NaiveDate,
    nights: u32,
    occupied: &OccupiedDateSet,
    exclude_reservation_id: Option<&str>,
) -> EngineResult<AvailabilityResult> {
    let conflicting_dates: Vec<NaiveDate> = stay_dates(start_date, nights)?
        .into_iter()
        .filter(|date| occupied.is_occupied(*date, exclude_reservation_id))
        .collect();

    debug!(
        cabin_id,
        start_date = %start_date,
        nights,
        conflicts = conflicting_dates.len(),
        "Checked availability"
    );

    Ok(AvailabilityResult {
        cabin_id: cabin_id.to_string(),
        available: conflicting_dates.is_empty(),
        conflicting_dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{BookedReservation, ReservationStatus};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn booked(id: &str, start: &str, end: &str) -> BookedReservation {
        BookedReservation {
            id: id.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status: ReservationStatus::Confirmed,
        }
    }

    #[test]
    fn test_empty_set_is_available() {
        let result = check_availability(
            "cabin_1",
            make_date("2026-01-12"),
            14,
            &OccupiedDateSet::new(),
            None,
        )
        .unwrap();
        assert!(result.available);
        assert!(result.conflicting_dates.is_empty());
        assert_eq!(result.cabin_id, "cabin_1");
    }

    #[test]
    fn test_identical_range_conflicts_on_every_night() {
        let occupied =
            OccupiedDateSet::from_reservations(&[booked("res_1", "2026-01-12", "2026-01-15")])
                .unwrap();
        let result =
            check_availability("cabin_1", make_date("2026-01-12"), 3, &occupied, None).unwrap();

        assert!(!result.available);
        assert_eq!(
            result.conflicting_dates,
            vec![
                make_date("2026-01-12"),
                make_date("2026-01-13"),
                make_date("2026-01-14"),
            ]
        );
    }

    #[test]
    fn test_back_to_back_stays_do_not_conflict() {
        // Existing guest checks out on the 15th; new guest checks in the same day
        let occupied =
            OccupiedDateSet::from_reservations(&[booked("res_1", "2026-01-12", "2026-01-15")])
                .unwrap();
        let result =
            check_availability("cabin_1", make_date("2026-01-15"), 2, &occupied, None).unwrap();
        assert!(result.available);
    }

    #[test]
    fn test_candidate_checkout_day_is_not_tested() {
        let occupied = OccupiedDateSet::from_dates([make_date("2026-01-15")]);
        let result =
            check_availability("cabin_1", make_date("2026-01-13"), 2, &occupied, None).unwrap();
        assert!(result.available);
    }

    #[test]
    fn test_collects_every_conflict_without_short_circuit() {
        let occupied = OccupiedDateSet::from_dates([
            make_date("2026-01-13"),
            make_date("2026-01-16"),
            make_date("2026-01-30"),
        ]);
        let result =
            check_availability("cabin_1", make_date("2026-01-12"), 7, &occupied, None).unwrap();
        assert_eq!(
            result.conflicting_dates,
            vec![make_date("2026-01-13"), make_date("2026-01-16")]
        );
    }

    #[test]
    fn test_excluding_edited_reservation_allows_extension() {
        let occupied =
            OccupiedDateSet::from_reservations(&[booked("res_1", "2026-01-12", "2026-01-14")])
                .unwrap();

        // Extending res_1 by a night clashes with itself unless excluded
        let without = check_availability("cabin_1", make_date("2026-01-12"), 3, &occupied, None)
            .unwrap();
        assert_eq!(without.conflicting_dates.len(), 2);

        let with =
            check_availability("cabin_1", make_date("2026-01-12"), 3, &occupied, Some("res_1"))
                .unwrap();
        assert!(with.available);
    }

    #[test]
    fn test_excluding_one_reservation_keeps_others() {
        let occupied = OccupiedDateSet::from_reservations(&[
            booked("res_1", "2026-01-12", "2026-01-14"),
            booked("res_2", "2026-01-14", "2026-01-16"),
        ])
        .unwrap();
        let result =
            check_availability("cabin_1", make_date("2026-01-12"), 4, &occupied, Some("res_1"))
                .unwrap();
        assert_eq!(
            result.conflicting_dates,
            vec![make_date("2026-01-14"), make_date("2026-01-15")]
        );
    }

    #[test]
    fn test_zero_nights_is_invalid_range() {
        let result = check_availability(
            "cabin_1",
            make_date("2026-01-12"),
            0,
            &OccupiedDateSet::new(),
            None,
        );
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }
}
