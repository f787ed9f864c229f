//! Core types shared by every engine and scheme.
//!
//! This module provides the error taxonomy, alphabets, input cleaning,
//! the [`NumberScheme`] validation contract and the [`Compound`] dispatcher.

mod alphabet;
mod clean;
mod compound;
mod error;
mod scheme;

pub use alphabet::*;
pub use clean::{clean, is_digits};
pub use compound::*;
pub use error::*;
pub use scheme::*;
