//! Aadhaar (Indian unique identity number).
//!
//! Twelve digits, never starting with 0 or 1, never a palindrome, with a
//! trailing Verhoeff check digit.

use crate::checksum::verhoeff;
use crate::core::{NumberScheme, ValidationError, clean, is_digits};

/// The Aadhaar scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aadhaar;

impl NumberScheme for Aadhaar {
    fn name(&self) -> &'static str {
        "in.aadhaar"
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -").trim().to_string()
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let number = self.compact(raw);
        if !is_digits(&number) {
            return Err(ValidationError::format("Aadhaar must be digits only"));
        }
        if number.len() != 12 {
            return Err(ValidationError::length(format!(
                "Aadhaar must be 12 digits, got {}",
                number.len()
            )));
        }
        // Structural check on a fixed-width field, so it follows the length check.
        if number.starts_with(['0', '1']) {
            return Err(ValidationError::format("Aadhaar cannot start with 0 or 1"));
        }
        if number.bytes().eq(number.bytes().rev()) {
            return Err(ValidationError::component("Aadhaar cannot be a palindrome"));
        }
        verhoeff::validate(&number)?;
        Ok(number)
    }

    /// `XXXX XXXX XXXX`
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        if number.len() != 12 || !number.is_ascii() {
            return number;
        }
        format!("{} {} {}", &number[..4], &number[4..8], &number[8..])
    }
}

/// Strip spaces and dashes.
pub fn compact(raw: &str) -> String {
    Aadhaar.compact(raw)
}

/// Validate an Aadhaar number and return its compact form.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    Aadhaar.validate(raw)
}

/// Whether `raw` is a valid Aadhaar number.
pub fn is_valid(raw: &str) -> bool {
    Aadhaar.is_valid(raw)
}

/// Print format: `XXXX XXXX XXXX`.
pub fn format(raw: &str) -> String {
    Aadhaar.format(raw)
}

/// Hide the first eight digits: `XXXX XXXX 1234`.
pub fn mask(raw: &str) -> String {
    let number = compact(raw);
    let start = number.len().saturating_sub(4);
    let tail: String = number.chars().skip(start).collect();
    format!("XXXX XXXX {tail}")
}
