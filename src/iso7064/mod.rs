//! ISO 7064 check character systems.
//!
//! | Module | System | Check characters | Valid checksum |
//! |--------|--------|------------------|----------------|
//! | [`mod_11_10`] | Mod 11,10 (hybrid, decimal) | 1 digit | 1 |
//! | [`mod_11_2`] | Mod 11,2 (pure, `X` = 10) | 1 digit or `X` | 1 |
//! | [`mod_37_36`] | Mod 37,36 (hybrid, any alphabet) | 1 symbol | 1 |
//! | [`mod_37_2`] | Mod 37,2 (pure, any alphabet) | 1 symbol | 1 |
//! | [`mod_97_10`] | Mod 97,10 (pure, whole-number) | 2 digits | 1 |
//!
//! The hybrid and pure systems are each implemented once over an
//! [`Alphabet`](crate::Alphabet); Mod 11,10 and Mod 11,2 are those engines
//! over a fixed decimal alphabet.
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::iso7064::{mod_11_10, mod_11_2, mod_97_10};
//!
//! assert_eq!(mod_11_10::calc_check_digit("79462").unwrap(), '3');
//! assert!(mod_11_10::is_valid("794623"));
//! assert_eq!(mod_11_2::calc_check_digit("079").unwrap(), 'X');
//! assert!(mod_97_10::is_valid("9999123456789012141490"));
//! ```

pub mod mod_11_10;
pub mod mod_11_2;
pub mod mod_37_2;
pub mod mod_37_36;
pub mod mod_97_10;

pub use mod_11_10::Mod11_10;
pub use mod_11_2::Mod11_2;
pub use mod_37_2::Mod37_2;
pub use mod_37_36::Mod37_36;
pub use mod_97_10::Mod97_10;
