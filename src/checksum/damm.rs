//! The Damm algorithm.
//!
//! Based on an anti-symmetric quasigroup of order 10 given as a 10×10 table
//! with an all-zero diagonal. The default is the table published by Damm;
//! any table of the same shape can be supplied via [`Damm::new`].

use crate::core::{DECIMAL, ValidationError};

use super::CheckAlgorithm;

/// A 10×10 quasigroup operation table.
pub type DammTable = [[u8; 10]; 10];

/// The default operation table.
pub const OPERATION_TABLE: DammTable = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// The Damm algorithm over a caller-supplied table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damm<'a> {
    table: &'a DammTable,
}

const DEFAULT: Damm<'static> = Damm::new(&OPERATION_TABLE);

impl<'a> Damm<'a> {
    /// Use `table` as the quasigroup operation.
    ///
    /// Entries must be digits and the diagonal must be zero; entries of 10
    /// or more are treated as a format error at checksum time.
    pub const fn new(table: &'a DammTable) -> Self {
        Self { table }
    }

    /// The digit to append to `number` to make it valid: the running
    /// interim value itself.
    pub fn calc_check_digit(&self, number: &str) -> Result<char, ValidationError> {
        let interim = self.checksum(number)?;
        Ok(DECIMAL.symbol_mod(interim))
    }
}

impl Default for Damm<'static> {
    fn default() -> Self {
        DEFAULT
    }
}

impl CheckAlgorithm for Damm<'_> {
    fn name(&self) -> &'static str {
        "damm"
    }

    fn checksum(&self, number: &str) -> Result<u32, ValidationError> {
        let mut interim = 0usize;
        for digit in DECIMAL.values(number)? {
            interim = self.table[interim][digit as usize] as usize;
            if interim > 9 {
                return Err(ValidationError::format(format!(
                    "damm table entry {interim} is not a digit"
                )));
            }
        }
        Ok(interim as u32)
    }

    fn valid_checksum(&self) -> u32 {
        0
    }

    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError> {
        self.calc_check_digit(number).map(String::from)
    }
}

/// Damm checksum of `number` with the default table. Valid numbers have a
/// checksum of 0.
pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    DEFAULT.checksum(number)
}

/// The digit to append to `number` to make it pass the Damm check.
pub fn calc_check_digit(number: &str) -> Result<char, ValidationError> {
    DEFAULT.calc_check_digit(number)
}

/// Check `number` against the Damm algorithm with the default table.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    DEFAULT.validate(number)
}

/// Whether `number` passes the Damm check with the default table.
pub fn is_valid(number: &str) -> bool {
    DEFAULT.is_valid(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn vectors() {
        assert_ne!(checksum("572").unwrap(), 0);
        assert_eq!(validate("572").unwrap_err().kind(), ErrorKind::InvalidChecksum);
        assert_eq!(calc_check_digit("572").unwrap(), '4');
        assert_eq!(validate("5724").unwrap(), "5724");
    }

    #[test]
    fn diagonal_is_zero() {
        for (i, row) in OPERATION_TABLE.iter().enumerate() {
            assert_eq!(row[i], 0);
        }
    }

    #[test]
    fn empty_and_non_numeric_fail_format() {
        assert_eq!(validate("").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(validate("57x4").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert!(!is_valid(""));
    }

    #[test]
    fn custom_table() {
        // Transposed default table: still a valid quasigroup with zero diagonal.
        let mut transposed = [[0u8; 10]; 10];
        for (i, row) in OPERATION_TABLE.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                transposed[j][i] = v;
            }
        }
        let damm = Damm::new(&transposed);
        let digit = damm.calc_check_digit("572").unwrap();
        assert!(damm.is_valid(&format!("572{digit}")));
    }

    #[test]
    fn broken_table_is_format_error() {
        let mut broken = OPERATION_TABLE;
        broken[0][5] = 42;
        let damm = Damm::new(&broken);
        assert_eq!(damm.checksum("5").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }
}
