//! Belgian social security number (INSZ / NISS).
//!
//! Either a national number or a BIS number. The BIS check runs first: an
//! out-of-range BIS month hands the input over to the national number.

use crate::core::{Compound, NumberScheme, ValidationError};

use super::{Bis, Nn};

/// The social security number as a dispatcher over BIS and NN.
pub static SSN: Compound<'static> = Compound::new("be.ssn", &[&Bis, &Nn]);

/// Strip spaces, dashes and dots.
pub fn compact(raw: &str) -> String {
    SSN.compact(raw)
}

/// Validate with whichever sub-scheme applies.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    SSN.validate(raw)
}

/// Whether `raw` is a valid national or BIS number.
pub fn is_valid(raw: &str) -> bool {
    SSN.is_valid(raw)
}

/// `"be.nn"` or `"be.bis"`, or `None` if neither accepts `raw`.
pub fn guess_type(raw: &str) -> Option<&'static str> {
    SSN.guess_type(raw)
}

/// Print format: `YY.MM.DD-SSS.CC`.
pub fn format(raw: &str) -> String {
    SSN.format(raw)
}
