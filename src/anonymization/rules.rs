//! Canonical anonymized values
//!
//! Every anonymized test-data row carries exactly these values (the email
//! keeps a per-row token in its local part).

/// Name written to every anonymized row
pub const ANON_NAME: &str = "Anonym Användare";

/// Domain of every anonymized email address
pub const ANON_EMAIL_DOMAIN: &str = "anon.test";

/// National identity number written to every anonymized row
///
/// Keeps the `YYMMDD-XXXX` shape so format validators accept it.
pub const ANON_NATIONAL_ID: &str = "000000-0000";

/// Address written to every anonymized row
pub const ANON_ADDRESS: &str = "REDACTED";

/// Number of hex characters of the SHA-256 digest kept in an anonymized email
pub const EMAIL_TOKEN_LEN: usize = 12;

/// Suffix an anonymized email must end with, `@anon.test`
pub fn anon_email_suffix() -> String {
    format!("@{ANON_EMAIL_DOMAIN}")
}

/// The personal fields subject to anonymization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    /// Full name
    Name,
    /// Email address
    Email,
    /// National identity number
    NationalId,
    /// Postal address
    Address,
}

impl PersonField {
    /// All anonymized fields, in column order
    pub const ALL: [PersonField; 4] = [
        PersonField::Name,
        PersonField::Email,
        PersonField::NationalId,
        PersonField::Address,
    ];

    /// Column name of the field
    pub fn column(&self) -> &'static str {
        match self {
            PersonField::Name => "name",
            PersonField::Email => "email",
            PersonField::NationalId => "national_id",
            PersonField::Address => "address",
        }
    }
}
