use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a number failed validation.
///
/// Validation reports the first problem found in the order
/// format → length → component → checksum, so a checksum failure is only
/// ever reported on input that is structurally sound.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum ValidationError {
    /// Characters outside the expected alphabet or a failed structural check.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Wrong number of characters after compaction.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// A decoded sub-field (date, region, entity type) is out of range.
    #[error("invalid component: {0}")]
    InvalidComponent(String),

    /// Structure and components are fine but the check digits do not match.
    #[error("invalid checksum: {0}")]
    InvalidChecksum(String),
}

/// Tag of a [`ValidationError`], ordered from least to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFormat,
    InvalidLength,
    InvalidComponent,
    InvalidChecksum,
}

impl ValidationError {
    /// Create an [`ValidationError::InvalidFormat`].
    pub fn format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }

    /// Create an [`ValidationError::InvalidLength`].
    pub fn length(reason: impl Into<String>) -> Self {
        Self::InvalidLength(reason.into())
    }

    /// Create an [`ValidationError::InvalidComponent`].
    pub fn component(reason: impl Into<String>) -> Self {
        Self::InvalidComponent(reason.into())
    }

    /// Create an [`ValidationError::InvalidChecksum`].
    pub fn checksum(reason: impl Into<String>) -> Self {
        Self::InvalidChecksum(reason.into())
    }

    /// The tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::InvalidLength(_) => ErrorKind::InvalidLength,
            Self::InvalidComponent(_) => ErrorKind::InvalidComponent,
            Self::InvalidChecksum(_) => ErrorKind::InvalidChecksum,
        }
    }

    /// The human-readable reason without the kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidFormat(r)
            | Self::InvalidLength(r)
            | Self::InvalidComponent(r)
            | Self::InvalidChecksum(r) => r,
        }
    }
}

/// Errors that can occur when constructing an [`Alphabet`](super::Alphabet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Fewer than two symbols.
    #[error("alphabet needs at least 2 symbols")]
    TooShort,

    /// More symbols than any supported algorithm can index.
    #[error("alphabet has more than 64 symbols")]
    TooLong,

    /// Only ASCII symbols are supported.
    #[error("alphabet contains a non-ASCII symbol")]
    NonAscii,

    /// The same symbol appears twice.
    #[error("alphabet contains '{0}' more than once")]
    Duplicate(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_ordered_by_specificity() {
        assert!(ErrorKind::InvalidFormat < ErrorKind::InvalidLength);
        assert!(ErrorKind::InvalidLength < ErrorKind::InvalidComponent);
        assert!(ErrorKind::InvalidComponent < ErrorKind::InvalidChecksum);
    }

    #[test]
    fn kind_and_reason() {
        let e = ValidationError::component("month out of range");
        assert_eq!(e.kind(), ErrorKind::InvalidComponent);
        assert_eq!(e.reason(), "month out of range");
    }

    #[test]
    fn display_includes_kind() {
        let e = ValidationError::length("expected 11 digits, got 9");
        assert_eq!(e.to_string(), "invalid length: expected 11 digits, got 9");
    }

    #[test]
    fn alphabet_error_display() {
        assert_eq!(
            AlphabetError::Duplicate('A').to_string(),
            "alphabet contains 'A' more than once"
        );
    }
}
