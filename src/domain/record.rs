//! Person record domain model
//!
//! A person record is either raw (generator output or externally supplied
//! values) or anonymized. Only rows flagged as test data are ever scrubbed.

use super::ids::RecordId;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// The four personally-identifiable fields of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// National identity number in `YYMMDD-XXXX` form
    pub national_id: String,

    /// Postal address on a single line
    pub address: String,
}

impl PersonFields {
    /// Creates a field set from its parts
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        national_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            national_id: national_id.into(),
            address: address.into(),
        }
    }
}

/// A stored person record
///
/// # Examples
///
/// ```
/// use registry_guard::domain::{PersonFields, PersonRecord, RecordId};
/// use chrono::Utc;
///
/// let record = PersonRecord::builder()
///     .id(RecordId::new(1).unwrap())
///     .fields(PersonFields::new("Ada", "ada@example.com", "850101-1234", "Main St 1"))
///     .test_data(true)
///     .created_at(Utc::now())
///     .build()
///     .unwrap();
///
/// assert!(!record.is_anonymized);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Personally-identifiable fields
    #[serde(flatten)]
    pub fields: PersonFields,

    /// Whether the row is synthetic test data subject to anonymization
    pub is_test_data: bool,

    /// Whether the row has been anonymized
    pub is_anonymized: bool,

    /// Creation timestamp (UTC, second precision)
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp (UTC, second precision)
    pub updated_at: DateTime<Utc>,
}

impl PersonRecord {
    /// Returns a builder for constructing a record
    pub fn builder() -> PersonRecordBuilder {
        PersonRecordBuilder::default()
    }
}

/// Builder for [`PersonRecord`]
#[derive(Debug, Default)]
pub struct PersonRecordBuilder {
    id: Option<RecordId>,
    fields: Option<PersonFields>,
    is_test_data: bool,
    is_anonymized: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl PersonRecordBuilder {
    /// Sets the record ID
    pub fn id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the personal fields
    pub fn fields(mut self, fields: PersonFields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Sets the test-data flag
    pub fn test_data(mut self, is_test_data: bool) -> Self {
        self.is_test_data = is_test_data;
        self
    }

    /// Sets the anonymized flag
    pub fn anonymized(mut self, is_anonymized: bool) -> Self {
        self.is_anonymized = is_anonymized;
        self
    }

    /// Sets the creation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the update time; defaults to the creation time
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the record
    ///
    /// # Errors
    ///
    /// Returns an error if the id, fields or creation time are missing
    pub fn build(self) -> Result<PersonRecord, String> {
        let id = self.id.ok_or_else(|| "Record ID is required".to_string())?;
        let fields = self
            .fields
            .ok_or_else(|| "Record fields are required".to_string())?;
        let created_at = self
            .created_at
            .ok_or_else(|| "Creation time is required".to_string())?
            .trunc_subsecs(0);
        let updated_at = self
            .updated_at
            .map(|t| t.trunc_subsecs(0))
            .unwrap_or(created_at);

        Ok(PersonRecord {
            id,
            fields,
            is_test_data: self.is_test_data,
            is_anonymized: self.is_anonymized,
            created_at,
            updated_at,
        })
    }
}

/// A record about to be inserted
///
/// The store assigns the id and timestamps; new rows always start with
/// `is_anonymized = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersonRecord {
    /// Personal fields as generated or ingested
    pub fields: PersonFields,

    /// Whether the row is synthetic test data
    pub is_test_data: bool,
}

impl NewPersonRecord {
    /// A raw synthetic test-data row
    pub fn test_data(fields: PersonFields) -> Self {
        Self {
            fields,
            is_test_data: true,
        }
    }

    /// A row that is not test data and must never be touched by the guard
    pub fn production(fields: PersonFields) -> Self {
        Self {
            fields,
            is_test_data: false,
        }
    }
}

/// Which rows a select or delete applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    /// Every row in the table
    All,
    /// Only rows flagged as test data
    TestData,
}

/// Current UTC time truncated to whole seconds
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
