//! Error types for the cabin pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the pricing and availability operations can report.

use thiserror::Error;

/// The main error type for the cabin pricing engine.
///
/// All errors are validation or configuration failures. None of them are
/// retried internally.
///
/// # Example
///
/// ```
/// use cabin_pricing::error::EngineError;
///
/// let error = EngineError::UnknownCategory {
///     category: "penthouse".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown cabin category: penthouse");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested stay is not a valid date range.
    #[error("Invalid date range: {message}")]
    InvalidRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// The cabin category is not mapped in the rate table.
    #[error("Unknown cabin category: {category}")]
    UnknownCategory {
        /// The category that could not be resolved.
        category: String,
    },

    /// A rate row violates the rate table invariants.
    #[error("Invalid rates for category '{category}': {message}")]
    InvalidRate {
        /// The category whose rates are invalid.
        category: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidRange`] with the given message.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        EngineError::InvalidRange {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_displays_message() {
        let error = EngineError::invalid_range("nights must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid date range: nights must be at least 1"
        );
    }

    #[test]
    fn test_unknown_category_displays_category() {
        let error = EngineError::UnknownCategory {
            category: "igloo".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown cabin category: igloo");
    }

    #[test]
    fn test_invalid_rate_displays_category_and_message() {
        let error = EngineError::InvalidRate {
            category: "tiered_a".to_string(),
            message: "weekend rate is below weekday rate".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rates for category 'tiered_a': weekend rate is below weekday rate"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "price overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: price overflow");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_category() -> EngineResult<()> {
            Err(EngineError::UnknownCategory {
                category: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_category()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
