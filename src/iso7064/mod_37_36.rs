//! ISO 7064 Mod 37,36 and, over other alphabets, any hybrid Mod (m+1),m.

use crate::checksum::CheckAlgorithm;
use crate::core::{Alphabet, BASE36, ValidationError};

/// Hybrid system Mod (m+1),m where m is the alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod37_36<'a> {
    alphabet: Alphabet<'a>,
}

const DEFAULT: Mod37_36<'static> = Mod37_36::new(BASE36);

impl<'a> Mod37_36<'a> {
    /// Mod (m+1),m over `alphabet`.
    pub const fn new(alphabet: Alphabet<'a>) -> Self {
        Self { alphabet }
    }

    /// The alphabet this instance works over.
    pub fn alphabet(&self) -> Alphabet<'a> {
        self.alphabet
    }

    /// The symbol to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        let m = self.alphabet.len();
        let check = self.checksum(number)?;
        let product = (nonzero(check, m) * 2) % (m + 1);
        let value = (1 - i64::from(product)).rem_euclid(i64::from(m));
        Ok(self.alphabet.symbol_mod(value as u32))
    }
}

impl Default for Mod37_36<'static> {
    fn default() -> Self {
        DEFAULT
    }
}

impl CheckAlgorithm for Mod37_36<'_> {
    fn name(&self) -> &'static str {
        "iso7064-mod-37-36"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        let m = self.alphabet.len();
        let values = self.alphabet.values(number)?;
        Ok(values.into_iter().fold(m / 2, |check, v| {
            ((nonzero(check, m) * 2) % (m + 1) + v) % m
        }))
    }

    fn valid_checksum(&self) -> u32 {
        1
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

/// A remainder of 0 stands for `m` in the hybrid recurrence.
fn nonzero(check: u32, m: u32) -> u32 {
    if check == 0 { m } else { check }
}

/// Mod 37,36 checksum of `number`. Valid numbers have a checksum of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    DEFAULT.checksum(number)
}

/// The character to append to `number` to make it valid under Mod 37,36.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    DEFAULT.calc_check_digit(number)
}

/// Check `number` against Mod 37,36.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    DEFAULT.validate(number)
}

/// Whether `number` passes Mod 37,36.
pub fn is_valid(number: &str) -> bool {
    DEFAULT.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DECIMAL, ErrorKind};

    #[test]
    fn vectors() {
        assert_eq!(checksum("A12425GABC1234002M").unwrap(), 1);
        assert_eq!(calc_check_digit("A12425GABC1234002").unwrap(), 'M');
        assert!(is_valid("A12425GABC1234002M"));
        assert!(!is_valid("A12425GABC1234002N"));
    }

    #[test]
    fn decimal_alphabet_is_mod_11_10() {
        let m = Mod37_36::new(DECIMAL);
        assert_eq!(m.calc_check_digit("00200667308").unwrap(), '5');
        assert!(m.is_valid("002006673085"));
    }

    #[test]
    fn lowercase_is_not_in_alphabet() {
        assert_eq!(
            validate("a12425GABC1234002M").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }
}
