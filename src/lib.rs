//! # pruefziffer
//!
//! Check-digit algorithms and a uniform validation contract for standard
//! numbers: tax IDs, bank account numbers, equipment identifiers and the like.
//!
//! The crate provides the generic engines (Luhn and Luhn mod N, Verhoeff,
//! Damm, the ISO 7064 family) together with the [`NumberScheme`] contract and
//! the [`Compound`] dispatcher that per-scheme modules build on.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::checksum::luhn;
//! use pruefziffer::iso7064::mod_97_10;
//!
//! assert_eq!(luhn::checksum("7894").unwrap(), 6);
//! assert_eq!(luhn::calc_check_digit("7894").unwrap(), '9');
//! assert!(luhn::is_valid("78949"));
//!
//! assert_eq!(mod_97_10::calc_check_digits("9999123456789012141400").unwrap(), "90");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Error taxonomy, alphabets, cleaning, scheme contract, dispatcher, Luhn/Verhoeff/Damm |
//! | `iso7064` (default) | ISO 7064 Mod 11,10 / 11,2 / 37,2 / 37,36 / 97,10 |
//! | `schemes` | Reference schemes: IBAN, IMEI, Aadhaar, Belgian NN/BIS/SSN |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod checksum;

#[cfg(feature = "iso7064")]
pub mod iso7064;

#[cfg(feature = "schemes")]
pub mod schemes;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
