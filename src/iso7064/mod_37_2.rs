//! ISO 7064 Mod 37,2 and, over other alphabets, any pure Mod m,2.

use crate::checksum::CheckAlgorithm;
use crate::core::{Alphabet, BASE36_STAR, ValidationError};

/// Pure system Mod m,2 where m is the alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod37_2<'a> {
    alphabet: Alphabet<'a>,
}

const DEFAULT: Mod37_2<'static> = Mod37_2::new(BASE36_STAR);

impl<'a> Mod37_2<'a> {
    /// Mod m,2 over `alphabet`.
    pub const fn new(alphabet: Alphabet<'a>) -> Self {
        Self { alphabet }
    }

    /// The alphabet this instance works over.
    pub fn alphabet(&self) -> Alphabet<'a> {
        self.alphabet
    }

    /// The symbol to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        let m = i64::from(self.alphabet.len());
        let check = i64::from(self.checksum(number)?);
        let value = (1 - 2 * check).rem_euclid(m);
        Ok(self.alphabet.symbol_mod(value as u32))
    }
}

impl Default for Mod37_2<'static> {
    fn default() -> Self {
        DEFAULT
    }
}

impl CheckAlgorithm for Mod37_2<'_> {
    fn name(&self) -> &'static str {
        "iso7064-mod-37-2"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        let m = self.alphabet.len();
        let values = self.alphabet.values(number)?;
        Ok(values.into_iter().fold(0, |check, v| (2 * check + v) % m))
    }

    fn valid_checksum(&self) -> u32 {
        1
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

/// Mod 37,2 checksum of `number`. Valid numbers have a checksum of 1.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    DEFAULT.checksum(number)
}

/// The character to append to `number` to make it valid under Mod 37,2.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    DEFAULT.calc_check_digit(number)
}

/// Check `number` against Mod 37,2.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    DEFAULT.validate(number)
}

/// Whether `number` passes Mod 37,2.
pub fn is_valid(number: &str) -> bool {
    DEFAULT.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors() {
        assert_eq!(calc_check_digit("G123489654321").unwrap(), 'Y');
        assert!(is_valid("G123489654321Y"));
        assert_eq!(checksum("G123489654321Y").unwrap(), 1);
    }

    #[test]
    fn star_is_a_check_character() {
        // Find a prefix whose check character is the 37th symbol.
        let prefix = (0..1000)
            .map(|i| format!("A{i}"))
            .find(|p| calc_check_digit(p).unwrap() == '*')
            .unwrap();
        assert!(is_valid(&format!("{prefix}*")));
    }
}
