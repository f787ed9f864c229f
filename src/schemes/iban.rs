//! IBAN (International Bank Account Number, ISO 13616).
//!
//! Two-letter country code, two check digits, then a country-specific BBAN.
//! The check digits are verified with ISO 7064 Mod 97,10 after moving the
//! first four characters to the end. Country-specific BBAN layouts are not
//! checked.

use crate::core::{NumberScheme, ValidationError, clean};
use crate::iso7064::mod_97_10;

/// Shortest (Norway) and longest IBAN permitted by ISO 13616.
const LENGTH: std::ops::RangeInclusive<usize> = 15..=34;

/// The IBAN scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iban;

impl NumberScheme for Iban {
    fn name(&self) -> &'static str {
        "iban"
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -").trim().to_uppercase()
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let number = self.compact(raw);
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::format("IBAN must be alphanumeric"));
        }
        if number.len() >= 4 {
            if !number[..2].bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(ValidationError::format(format!(
                    "IBAN must start with a country code, got '{}'",
                    &number[..2]
                )));
            }
            if !number[2..4].bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::format("IBAN check digits must be numeric"));
            }
        }
        if !LENGTH.contains(&number.len()) {
            return Err(ValidationError::length(format!(
                "IBAN must be 15 to 34 characters, got {}",
                number.len()
            )));
        }
        let rotated = format!("{}{}", &number[4..], &number[..4]);
        mod_97_10::validate(&rotated)?;
        Ok(number)
    }

    /// Groups of four separated by spaces.
    fn format(&self, raw: &str) -> String {
        let chars: Vec<char> = self.compact(raw).chars().collect();
        chars
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Strip spaces and dashes, uppercase.
pub fn compact(raw: &str) -> String {
    Iban.compact(raw)
}

/// Validate an IBAN and return its compact form.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    Iban.validate(raw)
}

/// Whether `raw` is a valid IBAN.
pub fn is_valid(raw: &str) -> bool {
    Iban.is_valid(raw)
}

/// Print format: groups of four separated by spaces.
pub fn format(raw: &str) -> String {
    Iban.format(raw)
}

/// Check digits for an IBAN in `country` with the given `bban`.
///
/// ```rust
/// use pruefziffer::schemes::iban;
///
/// assert_eq!(iban::calc_check_digits("DE", "3704 0044 0532 0130 00").unwrap(), "89");
/// ```
pub fn calc_check_digits(country: &str, bban: &str) -> Result<String, ValidationError> {
    let country = country.trim().to_uppercase();
    if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::format(format!(
            "'{country}' is not a two-letter country code"
        )));
    }
    mod_97_10::calc_check_digits(&format!("{}{country}00", compact(bban)))
}
