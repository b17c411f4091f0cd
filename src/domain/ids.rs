//! Domain identifier types
//!
//! Record identifiers are assigned by the store and never change, so they are
//! wrapped in a newtype to keep them from being mixed up with counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a person record
///
/// # Examples
///
/// ```
/// use registry_guard::domain::ids::RecordId;
/// use std::str::FromStr;
///
/// let id = RecordId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Creates a new RecordId
    ///
    /// Store-assigned identifiers start at 1, so zero and negative values are
    /// rejected.
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("Record ID must be positive, got {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid record ID '{s}': {e}"))?;
        Self::new(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
