//! Generic check-digit engines: Luhn (mod N), Verhoeff and Damm.
//!
//! Every engine is available both as a set of free functions over its
//! default configuration and as a value implementing [`CheckAlgorithm`],
//! which is how a custom alphabet or table is supplied.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::checksum::{damm, verhoeff, CheckAlgorithm, Luhn};
//! use pruefziffer::HEX;
//!
//! assert!(verhoeff::is_valid("12340"));
//! assert_eq!(damm::calc_check_digit("572").unwrap(), '4');
//! assert_eq!(Luhn::new(HEX).checksum("1234").unwrap(), 14);
//! ```

pub mod damm;
pub mod luhn;
pub mod verhoeff;

pub use damm::{Damm, DammTable};
pub use luhn::Luhn;
pub use verhoeff::Verhoeff;

use crate::core::ValidationError;

/// A check-digit algorithm over a fixed alphabet.
pub trait CheckAlgorithm {
    /// Short algorithm name, e.g. `"luhn"` or `"iso7064-mod-97-10"`.
    fn name(&self) -> &'static str;

    /// Checksum over `number`, check digits included.
    ///
    /// A character outside the algorithm's alphabet is
    /// [`ValidationError::InvalidFormat`].
    fn checksum(&self, number: &str) -> Result<u32, ValidationError>;

    /// The checksum a valid number has (0 or 1).
    fn valid_checksum(&self) -> u32;

    /// Check digits to append to `number` so it becomes valid.
    fn calc_check_digits(&self, number: &str) -> Result<String, ValidationError>;

    /// Check `number` and hand it back on success.
    fn validate<'n>(&self, number: &'n str) -> Result<&'n str, ValidationError> {
        if number.is_empty() {
            return Err(ValidationError::format("empty number"));
        }
        let checksum = self.checksum(number)?;
        if checksum != self.valid_checksum() {
            return Err(ValidationError::checksum(format!(
                "{} checksum is {checksum}, expected {}",
                self.name(),
                self.valid_checksum()
            )));
        }
        Ok(number)
    }

    /// Whether [`validate`](Self::validate) succeeds.
    fn is_valid(&self, number: &str) -> bool {
        self.validate(number).is_ok()
    }
}
