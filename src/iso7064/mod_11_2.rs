//! ISO 7064 Mod 11,2.
//!
//! Numeric input with a check character that is a digit or `X` (for 10).
//! This is [`Mod37_2`] over the alphabet `0123456789X`.

use crate::checksum::CheckAlgorithm;
use crate::core::{DECIMAL_X, ValidationError};

use super::Mod37_2;

const ENGINE: Mod37_2<'static> = Mod37_2::new(DECIMAL_X);

/// ISO 7064 Mod 11,2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod11_2;

impl Mod11_2 {
    /// The digit (or `X`) to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        ENGINE.calc_check_digit(number)
    }
}

impl CheckAlgorithm for Mod11_2 {
    fn name(&self) -> &'static str {
        "iso7064-mod-11-2"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        ENGINE.checksum(number)
    }

    fn valid_checksum(&self) -> u32 {
        1
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

/// Mod 11,2 checksum of `number`. Valid numbers have a checksum of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    Mod11_2.checksum(number)
}

/// The digit or `X` to append to `number` to make it valid under Mod 11,2.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    Mod11_2.calc_check_digit(number)
}

/// Check `number` against Mod 11,2.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    Mod11_2.validate(number)
}

/// Whether `number` passes Mod 11,2.
pub fn is_valid(number: &str) -> bool {
    Mod11_2.is_valid(number)
}
