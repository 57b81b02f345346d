//! Cabin category model.
//!
//! A [`CabinCategory`] selects the rate row used to price a stay. It is an
//! explicit field of a cabin record and is never guessed from a display name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The pricing tier a cabin belongs to.
///
/// # Example
///
/// ```
/// use cabin_pricing::models::CabinCategory;
///
/// let category: CabinCategory = "tiered_a".parse().unwrap();
/// assert_eq!(category, CabinCategory::TieredA);
/// assert_eq!(category.to_string(), "tiered_a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinCategory {
    /// Same nightly rate every day of the week.
    Flat,
    /// Day-of-week tiered pricing, first rate tier.
    TieredA,
    /// Day-of-week tiered pricing, second rate tier.
    TieredB,
}

impl CabinCategory {
    /// All known categories, in declaration order.
    pub const ALL: [CabinCategory; 3] = [
        CabinCategory::Flat,
        CabinCategory::TieredA,
        CabinCategory::TieredB,
    ];

    /// Returns the wire identifier of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinCategory::Flat => "flat",
            CabinCategory::TieredA => "tiered_a",
            CabinCategory::TieredB => "tiered_b",
        }
    }
}

impl fmt::Display for CabinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CabinCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownCategory {
                category: s.to_string(),
            })
    }
}
