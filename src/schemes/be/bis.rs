//! Belgian BIS number, issued to people not in the national register.
//!
//! Same layout as the national number with 20 (sex unknown) or 40 (sex
//! known) added to the birth month.

use crate::core::{NumberScheme, ValidationError};

/// The BIS number scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bis;

impl NumberScheme for Bis {
    fn name(&self) -> &'static str {
        "be.bis"
    }

    fn compact(&self, raw: &str) -> String {
        super::compact(raw)
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let number = self.compact(raw);
        super::check_structure(&number)?;
        let month = match super::field(&number, 2) {
            m @ 20..=32 => m - 20,
            m @ 40..=52 => m - 40,
            m => {
                return Err(ValidationError::component(format!(
                    "month {m} must be in 20..32 or 40..52 for a BIS number"
                )));
            }
        };
        let day = super::check_day(&number)?;
        let century = super::check_century(&number)?;
        super::check_date(century, &number, month, day)?;
        Ok(number)
    }

    fn format(&self, raw: &str) -> String {
        super::format(raw)
    }
}

/// Strip spaces, dashes and dots.
pub fn compact(raw: &str) -> String {
    Bis.compact(raw)
}

/// Validate a BIS number and return its compact form.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    Bis.validate(raw)
}

/// Whether `raw` is a valid BIS number.
pub fn is_valid(raw: &str) -> bool {
    Bis.is_valid(raw)
}

/// Print format: `YY.MM.DD-SSS.CC`.
pub fn format(raw: &str) -> String {
    Bis.format(raw)
}
