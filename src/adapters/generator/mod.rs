//! Synthetic person generation
//!
//! Generators produce plausible raw field values for seeding the register.
//! Everything they produce is flagged as test data.

pub mod faker;

pub use faker::FakerGenerator;

use crate::domain::{NewPersonRecord, PersonFields};
use std::fmt;

/// Source of synthetic person records
pub trait RecordGenerator: Send {
    /// Generate one set of raw person fields
    fn generate_record(&mut self) -> PersonFields;

    /// Generate `count` raw test-data rows
    fn generate_batch(&mut self, count: usize) -> Vec<NewPersonRecord> {
        (0..count)
            .map(|_| NewPersonRecord::test_data(self.generate_record()))
            .collect()
    }
}

/// Locales supported by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    ZhCn,
    ZhTw,
    JaJp,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Locale; 5] = [
        Locale::En,
        Locale::FrFr,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::JaJp,
    ];

    /// Parse a locale code such as `en`, `fr_FR` or `zh-tw`
    ///
    /// # Errors
    ///
    /// Returns an error naming the supported codes if the locale is unknown.
    pub fn parse(code: &str) -> Result<Self, String> {
        let normalized = code.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "en" | "en_us" => Ok(Locale::En),
            "fr" | "fr_fr" => Ok(Locale::FrFr),
            "zh_cn" => Ok(Locale::ZhCn),
            "zh_tw" => Ok(Locale::ZhTw),
            "ja" | "ja_jp" => Ok(Locale::JaJp),
            _ => Err(format!(
                "Unsupported generator locale '{}'. Must be one of: {}",
                code,
                Locale::ALL
                    .iter()
                    .map(Locale::code)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }

    /// Canonical locale code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::FrFr => "fr_fr",
            Locale::ZhCn => "zh_cn",
            Locale::ZhTw => "zh_tw",
            Locale::JaJp => "ja_jp",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en", Locale::En ; "plain english")]
    #[test_case("en_US", Locale::En ; "english with region")]
    #[test_case("fr-FR", Locale::FrFr ; "french with dash")]
    #[test_case("zh_cn", Locale::ZhCn ; "simplified chinese")]
    #[test_case("ZH_TW", Locale::ZhTw ; "traditional chinese upper")]
    #[test_case(" ja_jp ", Locale::JaJp ; "japanese padded")]
    fn test_parse_locale(code: &str, expected: Locale) {
        assert_eq!(Locale::parse(code).unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_locale() {
        let err = Locale::parse("sv_SE").unwrap_err();
        assert!(err.contains("sv_SE"));
        assert!(err.contains("fr_fr"));
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.code()).unwrap(), locale);
        }
    }

    struct Fixed;

    impl RecordGenerator for Fixed {
        fn generate_record(&mut self) -> PersonFields {
            PersonFields::new("A", "a@example.com", "900101-0001", "Street 1")
        }
    }

    #[test]
    fn test_generate_batch_marks_test_data() {
        let batch = Fixed.generate_batch(3);
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|r| r.is_test_data));
        assert!(Fixed.generate_batch(0).is_empty());
    }
}
