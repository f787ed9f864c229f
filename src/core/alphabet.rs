//! Ordered symbol sets used by the check-digit engines.

use std::fmt;

use super::error::{AlphabetError, ValidationError};

/// An ordered set of distinct ASCII symbols, each worth its position.
///
/// Alphabets are plain values: build one with [`Alphabet::new`] (usable in
/// `const` context) and pass it to an engine. The built-in constants below
/// are checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet<'a> {
    symbols: &'a str,
}

/// `0123456789`
pub const DECIMAL: Alphabet<'static> = builtin("0123456789");

/// `0123456789X`, decimal plus `X` for the value 10 (ISO 7064 Mod 11,2).
pub const DECIMAL_X: Alphabet<'static> = builtin("0123456789X");

/// `0123456789ABCDEF`
pub const HEX: Alphabet<'static> = builtin("0123456789ABCDEF");

/// `0-9A-Z` (ISO 7064 Mod 37,36).
pub const BASE36: Alphabet<'static> = builtin("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// `0-9A-Z*` (ISO 7064 Mod 37,2).
pub const BASE36_STAR: Alphabet<'static> = builtin("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*");

const fn builtin(symbols: &'static str) -> Alphabet<'static> {
    match Alphabet::new(symbols) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid built-in alphabet"),
    }
}

impl<'a> Alphabet<'a> {
    /// Build an alphabet, rejecting duplicates and non-ASCII symbols.
    pub const fn new(symbols: &'a str) -> Result<Self, AlphabetError> {
        let bytes = symbols.as_bytes();
        if bytes.len() < 2 {
            return Err(AlphabetError::TooShort);
        }
        if bytes.len() > 64 {
            return Err(AlphabetError::TooLong);
        }
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii() {
                return Err(AlphabetError::NonAscii);
            }
            let mut j = i + 1;
            while j < bytes.len() {
                if bytes[i] == bytes[j] {
                    return Err(AlphabetError::Duplicate(bytes[i] as char));
                }
                j += 1;
            }
            i += 1;
        }
        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the modulus of algorithms over this alphabet.
    pub const fn len(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Always `false`; an alphabet holds at least two symbols.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The symbols in value order.
    pub fn as_str(&self) -> &'a str {
        self.symbols
    }

    /// Value of `c`, or `None` if it is not part of the alphabet.
    pub fn value_of(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        self.symbols
            .bytes()
            .position(|b| b == c as u8)
            .map(|p| p as u32)
    }

    /// Symbol carrying `value`, or `None` if `value >= len()`.
    pub fn symbol(&self, value: u32) -> Option<char> {
        self.symbols
            .as_bytes()
            .get(value as usize)
            .map(|&b| b as char)
    }

    /// Symbol carrying `value`, where `value` is already reduced modulo `len()`.
    pub(crate) fn symbol_mod(&self, value: u32) -> char {
        self.symbols.as_bytes()[(value % self.len()) as usize] as char
    }

    /// Map every character of `number` to its value.
    pub fn values(&self, number: &str) -> Result<Vec<u32>, ValidationError> {
        number
            .chars()
            .map(|c| {
                self.value_of(c).ok_or_else(|| {
                    ValidationError::format(format!("'{c}' is not one of \"{}\"", self.symbols))
                })
            })
            .collect()
    }
}

impl fmt::Display for Alphabet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbols)
    }
}
