//! ISO 7064 Mod 11,10.
//!
//! Purely numeric with a single numeric check digit (no `X`). This is
//! [`Mod37_36`] over the decimal alphabet: the running value starts at 5 and
//! each digit is folded in as `((check or 10) * 2 % 11 + digit) % 10`.

use crate::checksum::CheckAlgorithm;
use crate::core::{DECIMAL, ValidationError};

use super::Mod37_36;

const ENGINE: Mod37_36<'static> = Mod37_36::new(DECIMAL);

/// ISO 7064 Mod 11,10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod11_10;

impl Mod11_10 {
    /// The digit to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        ENGINE.calc_check_digit(number)
    }
}

impl CheckAlgorithm for Mod11_10 {
    fn name(&self) -> &'static str {
        "iso7064-mod-11-10"
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

/// Mod 11,10 checksum of `number`. Valid numbers have a checksum of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    Mod11_10.checksum(number)
}

/// The digit to append to `number` to make it valid under Mod 11,10.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    Mod11_10.calc_check_digit(number)
}

/// Check `number` against Mod 11,10.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    Mod11_10.validate(number)
}

/// Whether `number` passes Mod 11,10.
pub fn is_valid(number: &str) -> bool {
    Mod11_10.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn vectors() {
        assert_eq!(calc_check_digit("79462").unwrap(), '3');
        assert!(is_valid("794623"));
        assert_eq!(checksum("79462").unwrap(), 4);
        assert_eq!(calc_check_digit("00200667308").unwrap(), '5');
        assert!(is_valid("002006673085"));
    }

    #[test]
    fn x_is_not_a_digit() {
        assert_eq!(validate("7946X").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn wrong_digit() {
        assert_eq!(validate("794624").unwrap_err().kind(), ErrorKind::InvalidChecksum);
    }
}
