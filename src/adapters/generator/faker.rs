//! Faker-backed record generator
//!
//! Names, emails and addresses come from the `fake` crate for the configured
//! locale. National ids use the `YYMMDD-XXXX` shape built from an adult
//! birth date.

use super::{Locale, RecordGenerator};
use crate::anonymization::sha256_hex;
use crate::domain::{PersonFields, RegistryError, Result};
use chrono::{Days, Local, Months, NaiveDate};
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::Name;
use fake::locales::{Data, EN, FR_FR, JA_JP, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

/// Shape every generated email must match
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Domain used when a generated email has to be replaced
pub const FALLBACK_EMAIL_DOMAIN: &str = "example.com";

/// Hex characters of the digest used for a replacement email
const FALLBACK_TOKEN_LEN: usize = 10;

const MIN_AGE_YEARS: u32 = 18;
const MAX_AGE_YEARS: u32 = 90;

/// Record generator backed by `fake`
pub struct FakerGenerator {
    locale: Locale,
    rng: StdRng,
    email_pattern: Regex,
}

impl FakerGenerator {
    /// Create a generator seeded from OS entropy
    ///
    /// # Errors
    ///
    /// Returns an error if the email pattern fails to compile.
    pub fn new(locale: Locale) -> Result<Self> {
        Self::with_rng(locale, StdRng::from_entropy())
    }

    /// Create a deterministic generator
    pub fn with_seed(locale: Locale, seed: u64) -> Result<Self> {
        Self::with_rng(locale, StdRng::seed_from_u64(seed))
    }

    fn with_rng(locale: Locale, rng: StdRng) -> Result<Self> {
        let email_pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| RegistryError::Generation(format!("Invalid email pattern: {e}")))?;
        Ok(Self {
            locale,
            rng,
            email_pattern,
        })
    }

    /// Locale in use
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl RecordGenerator for FakerGenerator {
    fn generate_record(&mut self) -> PersonFields {
        let raw = match self.locale {
            Locale::En => raw_person(EN, &mut self.rng),
            Locale::FrFr => raw_person(FR_FR, &mut self.rng),
            Locale::ZhCn => raw_person(ZH_CN, &mut self.rng),
            Locale::ZhTw => raw_person(ZH_TW, &mut self.rng),
            Locale::JaJp => raw_person(JA_JP, &mut self.rng),
        };

        let email = repair_email(&self.email_pattern, raw.email);
        let birth = birth_date(&mut self.rng, Local::now().date_naive());
        let national_id = format_national_id(birth, self.rng.gen_range(0..=9999));

        PersonFields::new(raw.name, email, national_id, single_line_address(&raw.address))
    }
}

struct RawPerson {
    name: String,
    email: String,
    address: String,
}

fn raw_person<L, R>(locale: L, rng: &mut R) -> RawPerson
where
    L: Data + Copy,
    R: Rng + ?Sized,
{
    let name: String = Name(locale).fake_with_rng(rng);
    let email: String = SafeEmail(locale).fake_with_rng(rng);
    let building: String = BuildingNumber(locale).fake_with_rng(rng);
    let street: String = StreetName(locale).fake_with_rng(rng);
    let zip: String = ZipCode(locale).fake_with_rng(rng);
    let city: String = CityName(locale).fake_with_rng(rng);

    RawPerson {
        name,
        email,
        address: format!("{building} {street}\n{zip} {city}"),
    }
}

/// Keep a well-formed email, or replace it with a digest-based one
///
/// The replacement is `<first 10 hex chars of sha256(email)>@example.com`.
pub fn repair_email(pattern: &Regex, email: String) -> String {
    if pattern.is_match(&email) {
        return email;
    }

    let digest = sha256_hex(&email);
    tracing::debug!(
        email_hash = %digest,
        "Replaced malformed generated email"
    );
    format!("{}@{FALLBACK_EMAIL_DOMAIN}", &digest[..FALLBACK_TOKEN_LEN])
}

/// Format a national id as `YYMMDD-XXXX`
pub fn format_national_id(birth: NaiveDate, serial: u16) -> String {
    format!("{}-{:04}", birth.format("%y%m%d"), serial % 10_000)
}

/// Join a multi-line address into one line
pub fn single_line_address(address: &str) -> String {
    address
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Random birth date for someone between 18 and 90 years old on `today`
fn birth_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let youngest = today
        .checked_sub_months(Months::new(MIN_AGE_YEARS * 12))
        .unwrap_or(today);
    let oldest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(youngest);

    let span = (youngest - oldest).num_days().max(0) as u64;
    let offset = rng.gen_range(0..=span);
    oldest.checked_add_days(Days::new(offset)).unwrap_or(youngest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(EMAIL_PATTERN).unwrap()
    }

    #[test]
    fn test_repair_email_keeps_valid() {
        assert_eq!(
            repair_email(&pattern(), "jane.doe@example.org".to_string()),
            "jane.doe@example.org"
        );
    }

    #[test]
    fn test_repair_email_replaces_malformed() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(repair_email(&pattern(), "abc".to_string()), "ba7816bf8f@example.com");

        let repaired = repair_email(&pattern(), "two words@host.com".to_string());
        assert!(pattern().is_match(&repaired));
        assert!(repaired.ends_with("@example.com"));
    }

    #[test]
    fn test_format_national_id() {
        let birth = NaiveDate::from_ymd_opt(1985, 3, 7).unwrap();
        assert_eq!(format_national_id(birth, 42), "850307-0042");
        assert_eq!(format_national_id(birth, 9999), "850307-9999");

        let birth = NaiveDate::from_ymd_opt(2001, 12, 31).unwrap();
        assert_eq!(format_national_id(birth, 0), "011231-0000");
    }

    #[test]
    fn test_single_line_address() {
        assert_eq!(
            single_line_address("12 Rue de la Paix\n75002 Paris"),
            "12 Rue de la Paix, 75002 Paris"
        );
        assert_eq!(single_line_address("One line"), "One line");
    }

    #[test]
    fn test_birth_date_within_age_range() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let youngest = NaiveDate::from_ymd_opt(2006, 2, 28).unwrap();
        let oldest = NaiveDate::from_ymd_opt(1934, 2, 28).unwrap();

        for _ in 0..500 {
            let birth = birth_date(&mut rng, today);
            assert!(birth <= youngest, "{birth} too young");
            assert!(birth >= oldest, "{birth} too old");
        }
    }

    #[test]
    fn test_generated_records_are_well_formed() {
        let national_id = Regex::new(r"^\d{6}-\d{4}$").unwrap();

        for locale in Locale::ALL {
            let mut generator = FakerGenerator::with_seed(locale, 42).unwrap();
            assert_eq!(generator.locale(), locale);

            for _ in 0..20 {
                let fields = generator.generate_record();
                assert!(!fields.name.is_empty());
                assert!(pattern().is_match(&fields.email), "{}", fields.email);
                assert!(national_id.is_match(&fields.national_id));
                assert!(!fields.address.contains('\n'));
            }
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = FakerGenerator::with_seed(Locale::En, 9).unwrap();
        let mut b = FakerGenerator::with_seed(Locale::En, 9).unwrap();

        let left = a.generate_record();
        let right = b.generate_record();
        assert_eq!(left.name, right.name);
        assert_eq!(left.email, right.email);
        assert_eq!(left.address, right.address);
    }
}
