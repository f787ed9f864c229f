//! IMEI (International Mobile Equipment Identity).
//!
//! 14 digits without check digit, 15 digits with a Luhn check digit, or the
//! 16-digit IMEISV carrying a software version instead of a check digit.

use crate::checksum::luhn;
use crate::core::{NumberScheme, ValidationError, clean, is_digits};

/// The IMEI scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Imei;

impl NumberScheme for Imei {
    fn name(&self) -> &'static str {
        "imei"
    }

    fn compact(&self, raw: &str) -> String {
        clean(raw, " -").trim().to_string()
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let number = self.compact(raw);
        if !is_digits(&number) {
            return Err(ValidationError::format("IMEI must be digits only"));
        }
        match number.len() {
            14 | 16 => {}
            15 => {
                luhn::validate(&number)?;
            }
            n => {
                return Err(ValidationError::length(format!(
                    "IMEI must be 14, 15 or 16 digits, got {n}"
                )));
            }
        }
        Ok(number)
    }

    /// `TAC-serial-check` (or `-SV` for IMEISV).
    fn format(&self, raw: &str) -> String {
        let number = self.compact(raw);
        if !number.is_ascii() || number.len() < 8 {
            return number;
        }
        let (tac, rest) = number.split_at(8);
        let (serial, tail) = rest.split_at(rest.len().min(6));
        [tac, serial, tail]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Strip spaces and dashes.
pub fn compact(raw: &str) -> String {
    Imei.compact(raw)
}

/// Validate an IMEI and return its compact form.
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    Imei.validate(raw)
}

/// Whether `raw` is a valid IMEI or IMEISV.
pub fn is_valid(raw: &str) -> bool {
    Imei.is_valid(raw)
}

/// Print format: `TAC-serial-check`.
pub fn format(raw: &str) -> String {
    Imei.format(raw)
}

/// `"IMEI"` or `"IMEISV"` for a valid number, `None` otherwise.
pub fn imei_type(raw: &str) -> Option<&'static str> {
    match validate(raw).ok()?.len() {
        14 | 15 => Some("IMEI"),
        16 => Some("IMEISV"),
        _ => None,
    }
}
