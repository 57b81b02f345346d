//! Request types for the cabin pricing API.
//!
//! Dates and categories arrive as plain strings so that malformed values
//! are reported as engine validation errors rather than generic
//! deserialization failures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{check_stay_length, nights_between, parse_date};
use crate::error::EngineResult;
use crate::models::{CabinCategory, Stay};

/// Request body for the `POST /price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    /// The cabin category identifier (e.g., "tiered_a").
    pub category: String,
    /// The check-in date, `YYYY-MM-DD`.
    pub start_date: String,
    /// The checkout date, `YYYY-MM-DD`, exclusive.
    pub end_date: String,
}

impl PriceRequest {
    /// Validates the request into a [`Stay`] of at most `max_nights`
    /// nights.
    pub fn to_stay(&self, max_nights: u32) -> EngineResult<Stay> {
        let category: CabinCategory = self.category.parse()?;
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        let nights = check_stay_length(nights_between(start_date, end_date)?, max_nights)?;
        Stay::new(category, start_date, nights)
    }
}

/// Query parameters for the `GET /availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// The cabin to check.
    pub cabin_id: String,
    /// The candidate check-in date, `YYYY-MM-DD`.
    pub start_date: String,
    /// The candidate checkout date, `YYYY-MM-DD`, exclusive.
    pub end_date: String,
    /// A reservation whose own dates should not count as conflicts.
    #[serde(default)]
    pub exclude_reservation_id: Option<String>,
}

impl AvailabilityQuery {
    /// Validates the candidate range, returning the check-in date and the
    /// number of nights, at most `max_nights`.
    pub fn to_range(&self, max_nights: u32) -> EngineResult<(NaiveDate, u32)> {
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        let nights = check_stay_length(nights_between(start_date, end_date)?, max_nights)?;
        Ok((start_date, nights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    const MAX_NIGHTS: u32 = 365;

    #[test]
    fn test_deserialize_price_request() {
        let json = r#"{
            "category": "tiered_a",
            "start_date": "2026-01-16",
            "end_date": "2026-01-18"
        }"#;

        let request: PriceRequest = serde_json::from_str(json).unwrap();
        let stay = request.to_stay(MAX_NIGHTS).unwrap();
        assert_eq!(stay.category, CabinCategory::TieredA);
        assert_eq!(stay.nights, 2);
    }

    #[test]
    fn test_price_request_unknown_category() {
        let request = PriceRequest {
            category: "palapa".to_string(),
            start_date: "2026-01-16".to_string(),
            end_date: "2026-01-18".to_string(),
        };
        assert!(matches!(
            request.to_stay(MAX_NIGHTS),
            Err(EngineError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_price_request_malformed_date() {
        let request = PriceRequest {
            category: "flat".to_string(),
            start_date: "16/01/2026".to_string(),
            end_date: "2026-01-18".to_string(),
        };
        assert!(matches!(
            request.to_stay(MAX_NIGHTS),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_availability_query_range() {
        let query = AvailabilityQuery {
            cabin_id: "cabin_1".to_string(),
            start_date: "2026-01-12".to_string(),
            end_date: "2026-01-17".to_string(),
            exclude_reservation_id: None,
        };
        let (start, nights) = query.to_range(MAX_NIGHTS).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        assert_eq!(nights, 5);
    }

    #[test]
    fn test_availability_query_reversed_range() {
        let query = AvailabilityQuery {
            cabin_id: "cabin_1".to_string(),
            start_date: "2026-01-17".to_string(),
            end_date: "2026-01-12".to_string(),
            exclude_reservation_id: None,
        };
        assert!(matches!(
            query.to_range(MAX_NIGHTS),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_price_request_longer_than_maximum_stay() {
        let request = PriceRequest {
            category: "tiered_a".to_string(),
            start_date: "0001-01-01".to_string(),
            end_date: "9999-12-31".to_string(),
        };
        assert!(matches!(
            request.to_stay(MAX_NIGHTS),
            Err(EngineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_price_request_at_maximum_stay() {
        let request = PriceRequest {
            category: "flat".to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2027-01-01".to_string(),
        };
        assert_eq!(request.to_stay(MAX_NIGHTS).unwrap().nights, 365);
        assert!(request.to_stay(364).is_err());
    }

    #[test]
    fn test_availability_query_longer_than_maximum_stay() {
        let query = AvailabilityQuery {
            cabin_id: "cabin_1".to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2027-01-02".to_string(),
            exclude_reservation_id: None,
        };
        assert!(matches!(
            query.to_range(MAX_NIGHTS),
            Err(EngineError::InvalidRange { .. })
        ));
    }
}
