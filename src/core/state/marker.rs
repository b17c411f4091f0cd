//! Daily marker model
//!
//! The marker records the last calendar date on which the daily sweep
//! completed. It is stored as an ISO `YYYY-MM-DD` string under a fixed key
//! in the metadata table.

use crate::domain::{RegistryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata key holding the marker
pub const DAILY_MARKER_KEY: &str = "last_anonym_check_date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Last date the daily sweep completed
///
/// # Examples
///
/// ```
/// use registry_guard::core::state::DailyMarker;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
/// let marker = DailyMarker::parse("2030-06-01").unwrap();
///
/// assert!(marker.covers(today));
/// assert_eq!(marker.to_string(), "2030-06-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyMarker {
    date: NaiveDate,
}

impl DailyMarker {
    /// Marker for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parse a stored value
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value is not an ISO date.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map(Self::new)
            .map_err(|e| RegistryError::Validation(format!("Invalid daily marker '{value}': {e}")))
    }

    /// The recorded date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the daily sweep already ran on `today`
    pub fn covers(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

impl fmt::Display for DailyMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}
