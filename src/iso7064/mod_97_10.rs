//! ISO 7064 Mod 97,10.
//!
//! The whole number is read as one decimal numeral, with every letter
//! expanded to its two-digit base-36 value (`A` = 10 … `Z` = 35), and taken
//! modulo 97. A valid number, including its two trailing check digits, has
//! a remainder of 1. The remainder is folded digit by digit, so arbitrarily
//! long numbers need no big-integer type.

use crate::checksum::CheckAlgorithm;
use crate::core::ValidationError;

/// ISO 7064 Mod 97,10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod97_10;

impl CheckAlgorithm for Mod97_10 {
    fn name(&self) -> &'static str {
        "iso7064-mod-97-10"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        number.chars().try_fold(0u32, |acc, c| {
            let value = c
                .to_digit(36)
                .ok_or_else(|| ValidationError::format(format!("'{c}' is not alphanumeric")))?;
            let shift = if value < 10 { 10 } else { 100 };
            Ok((acc * shift + value) % 97)
        })
    }

    fn valid_checksum(&self) -> u32 {
        1
    }

    /// The two digits to append to `number`.
    ///
    /// Unlike the module-level [`calc_check_digits`], `number` does not carry
    /// a `00` placeholder.
    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        calc_check_digits(&format!("{number}00"))
    }

    /// Requires at least one payload character followed by two check digits.
    ///
    /// The check digits must equal the calculated ones, so of the values
    /// giving a remainder of 1 only `02`..=`98` are accepted.
    fn validate<'n>(&self, number: &'n str) -> Result<&'n str, ValidationError> {
        if number.chars().count() < 3 {
            return Err(ValidationError::format(
                "need at least one character before the two check digits",
            ));
        }
        if !number.chars().rev().take(2).all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::format("check digits must be numeric"));
        }
        let (payload, check) = number.split_at(number.len() - 2);
        let expected = self.calc_check_digits(payload)?;
        if check != expected {
            return Err(ValidationError::checksum(format!(
                "check digits are {check}, expected {expected}"
            )));
        }
        Ok(number)
    }
}

/// Remainder of `number` modulo 97. Valid numbers have a checksum of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    Mod97_10.checksum(number)
}

/// The two check digits for `number`, whose last two positions are the
/// check-digit slots filled with `00`.
///
/// ```rust
/// use pruefziffer::iso7064::mod_97_10;
///
/// assert_eq!(mod_97_10::calc_check_digits("9999123456789012141400").unwrap(), "90");
/// ```
pub fn calc_check_digits(number: &str) -> Result<String, ValidationError> {
    let checksum = checksum(number)?;
    Ok(format!("{:02}", 98 - checksum))
}

/// Check `number`, check digits included, against Mod 97,10.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    Mod97_10.validate(number)
}

/// Whether `number` passes Mod 97,10.
pub fn is_valid(number: &str) -> bool {
    Mod97_10.is_valid(number)
}
