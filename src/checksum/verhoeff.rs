//! The Verhoeff algorithm.
//!
//! Uses the multiplication table of the dihedral group D5 and a table of
//! eight position-dependent permutations. Detects every single-digit
//! substitution and every adjacent transposition.

use crate::core::{DECIMAL, ValidationError};

use super::CheckAlgorithm;

/// Multiplication table of D5. Row and column order is fixed.
static MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation applied at position `i` (from the right) is row `i % 8`.
static PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// The Verhoeff algorithm over decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verhoeff;

impl Verhoeff {
    /// The digit to append to `number` to make it valid.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        let mut values = DECIMAL.values(number)?;
        values.push(0);
        let check = accumulate(&values);
        let digit = MULTIPLICATION[check]
            .iter()
            .position(|&v| v == 0)
            .unwrap_or(0);
        Ok(DECIMAL.symbol_mod(digit as u32))
    }
}

impl CheckAlgorithm for Verhoeff {
    fn name(&self) -> &'static str {
        "verhoeff"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        let values = DECIMAL.values(number)?;
        Ok(accumulate(&values) as u32)
    }

    fn valid_checksum(&self) -> u32 {
        0
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

fn accumulate(values: &[u32]) -> usize {
    values.iter().rev().enumerate().fold(0, |check, (i, &digit)| {
        let permuted = PERMUTATION[i % 8][digit as usize];
        MULTIPLICATION[check][permuted as usize] as usize
    })
}

/// Verhoeff checksum of `number`. Valid numbers have a checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    Verhoeff.checksum(number)
}

/// The digit to append to `number` to make it pass the Verhoeff check.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    Verhoeff.calc_check_digit(number)
}

/// Check `number` against the Verhoeff algorithm.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    Verhoeff.validate(number)
}

/// Whether `number` passes the Verhoeff check.
pub fn is_valid(number: &str) -> bool {
    Verhoeff.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn vectors() {
        assert!(!is_valid("1234"));
        assert_eq!(checksum("1234").unwrap(), 1);
        assert_eq!(calc_check_digit("1234").unwrap(), '0');
        assert!(is_valid("12340"));
        assert_eq!(calc_check_digit("236").unwrap(), '3');
        assert!(is_valid("2363"));
    }

    #[test]
    fn detects_adjacent_transposition() {
        assert!(is_valid("12340"));
        assert!(!is_valid("21340"));
        assert!(!is_valid("13240"));
    }

    #[test]
    fn detects_single_substitution() {
        for d in ['1', '2', '3', '4', '5', '6', '7', '8', '9'] {
            assert!(!is_valid(&format!("1234{d}")));
        }
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(validate("12a40").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(validate("").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }
}
