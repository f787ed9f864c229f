//! Reference number schemes built on the core engines.
//!
//! Each scheme is a unit struct implementing [`NumberScheme`](crate::NumberScheme)
//! plus module-level `compact`/`validate`/`is_valid`/`format` functions.
//!
//! | Scheme | Engine |
//! |--------|--------|
//! | [`iban`] | ISO 7064 Mod 97,10 |
//! | [`imei`] | Luhn |
//! | [`aadhaar`] | Verhoeff |
//! | [`be::nn`], [`be::bis`] | Mod 97 remainder |
//! | [`be::ssn`] | [`Compound`](crate::Compound) over BIS and NN |
//!
//! # Example
//!
//! ```rust
//! use pruefziffer::schemes::{be, iban};
//!
//! assert!(iban::is_valid("GR16 0110 1050 0000 1054 7023 795"));
//! assert_eq!(be::ssn::guess_type("98.47.28-997.65"), Some("be.bis"));
//! ```

pub mod aadhaar;
pub mod be;
pub mod iban;
pub mod imei;

pub use aadhaar::Aadhaar;
pub use iban::Iban;
pub use imei::Imei;
