//! The Luhn and Luhn mod N algorithms.
//!
//! Starting from the rightmost symbol, every second symbol has its value
//! doubled; a doubled value of `N` or more is reduced to the sum of its
//! quotient and remainder by `N`. The sum of all values modulo `N` must be 0.
//! With the default decimal alphabet this is the classic credit-card check;
//! any other [`Alphabet`] turns it into Luhn mod N.

use crate::core::{Alphabet, DECIMAL, ValidationError};

use super::CheckAlgorithm;

/// Luhn mod N over an alphabet of N symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Luhn<'a> {
    alphabet: Alphabet<'a>,
}

const DEFAULT: Luhn<'static> = Luhn::new(DECIMAL);

impl<'a> Luhn<'a> {
    /// Luhn mod `alphabet.len()`.
    pub const fn new(alphabet: Alphabet<'a>) -> Self {
        Self { alphabet }
    }

    /// The alphabet this instance works over.
    pub fn alphabet(&self) -> Alphabet<'a> {
        self.alphabet
    }

    /// The symbol to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        let mut values = self.alphabet.values(number)?;
        values.push(0);
        let n = self.alphabet.len();
        let sum = sum(&values, n);
        Ok(self.alphabet.symbol_mod(n - sum))
    }
}

impl Default for Luhn<'static> {
    fn default() -> Self {
        DEFAULT
    }
}

impl CheckAlgorithm for Luhn<'_> {
    fn name(&self) -> &'static str {
        "luhn"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        let values = self.alphabet.values(number)?;
        Ok(sum(&values, self.alphabet.len()))
    }

    fn valid_checksum(&self) -> u32 {
        0
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

fn sum(values: &[u32], n: u32) -> u32 {
    values.iter().rev().enumerate().fold(0, |acc, (i, &v)| {
        let term = if i % 2 == 0 {
            v
        } else {
            let doubled = v * 2;
            doubled / n + doubled % n
        };
        (acc + term) % n
    })
}

/// Luhn checksum over a decimal number. Valid numbers have a checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    DEFAULT.checksum(number)
}

/// The digit to append to a decimal `number` to make it pass the Luhn check.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    DEFAULT.calc_check_digit(number)
}

/// Check a decimal number against the Luhn algorithm.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    DEFAULT.validate(number)
}

/// Whether a decimal number passes the Luhn check.
pub fn is_valid(number: &str) -> bool {
    DEFAULT.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BASE36, ErrorKind};

    #[test]
    fn decimal_vectors() {
        assert_eq!(checksum("7894").unwrap(), 6);
        assert_eq!(calc_check_digit("7894").unwrap(), '9');
        assert_eq!(validate("78949").unwrap(), "78949");
        assert!(is_valid("4111111111111111"));
    }

    #[test]
    fn wrong_check_digit() {
        let err = validate("7894").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChecksum);
    }

    #[test]
    fn empty_is_format_error() {
        assert_eq!(validate("").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert!(!is_valid(""));
    }

    #[test]
    fn foreign_symbol_is_format_error() {
        assert_eq!(validate("78a49").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert!(checksum("7-8").is_err());
    }

    #[test]
    fn luhn_mod_16() {
        let hex = Alphabet::new("0123456789abcdef").unwrap();
        let luhn = Luhn::new(hex);
        assert_eq!(luhn.checksum("1234").unwrap(), 14);
        assert!(!luhn.is_valid("1234"));
        assert_eq!(luhn.calc_check_digit("1234").unwrap(), '0');
        assert!(luhn.is_valid("12340"));
    }

    #[test]
    fn luhn_mod_36_round_trip() {
        let luhn = Luhn::new(BASE36);
        let digit = luhn.calc_check_digit("K4ZZ9Q").unwrap();
        assert!(luhn.is_valid(&format!("K4ZZ9Q{digit}")));
    }

    #[test]
    fn default_is_decimal() {
        assert_eq!(Luhn::default().alphabet(), DECIMAL);
        assert_eq!(Luhn::default().calc_check_digits("35686800004141").unwrap(), "8");
    }
}
