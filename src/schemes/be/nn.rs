//! Belgian national number (Rijksregisternummer / Numéro National).

use crate::core::{NumberScheme, ValidationError};

/// The national number scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nn;

impl NumberScheme for Nn {
    fn name(&self) -> &'static str {
        "be.nn"
    }

    fn compact(&self, raw: &str) -> String {
        super::compact(raw)
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let number = self.compact(raw);
        super::check_structure(&number)?;
        let month = super::field(&number, 2);
        if month > 12 {
            return Err(ValidationError::component(format!(
                "month {month} out of range for a national number"
            )));
        }
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
    Nn.compact(raw)
}

/// Validate a national number and return its compact form.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    Nn.validate(raw)
}

/// Whether `raw` is a valid national number.
pub fn is_valid(raw: &str) -> bool {
    Nn.is_valid(raw)
}

/// Print format: `YY.MM.DD-SSS.CC`.
pub fn format(raw: &str) -> String {
    Nn.format(raw)
}
