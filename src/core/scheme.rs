use super::error::ValidationError;

/// The validation contract every number scheme implements.
///
/// `validate` must check, in order, format (character class), length,
/// components (decoded sub-fields) and finally the checksum, so the error
/// kind a caller sees is always the most structural problem.
///
/// The trait is object-safe so that schemes can be collected in a
/// [`Compound`](super::Compound) table.
pub trait NumberScheme: Send + Sync {
    /// Stable identifier of the scheme (e.g. `"be.nn"`).
    fn name(&self) -> &'static str;

    /// Strip separators and normalize case. Never fails.
    fn compact(&self, raw: &str) -> String;

    /// Validate `raw` and return its compact form.
    fn validate(&self, raw: &str) -> Result<String, ValidationError>;

    /// Whether [`validate`](Self::validate) succeeds.
    fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }

    /// Reformat to the canonical presentation. Defaults to the compact form.
    ///
    /// `compact(format(x))` must equal `compact(x)`.
    fn format(&self, raw: &str) -> String {
        self.compact(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clean;

    struct Digits4;

    impl NumberScheme for Digits4 {
        fn name(&self) -> &'static str {
            "digits4"
        }

        fn compact(&self, raw: &str) -> String {
            clean(raw, " ").trim().to_string()
        }

        fn validate(&self, raw: &str) -> Result<String, ValidationError> {
            let number = self.compact(raw);
            if !crate::core::is_digits(&number) {
                return Err(ValidationError::format("digits only"));
            }
            if number.len() != 4 {
                return Err(ValidationError::length("expected 4 digits"));
            }
            Ok(number)
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(Digits4.is_valid("12 34"));
        assert!(!Digits4.is_valid("123"));
        assert!(!Digits4.is_valid(""));
    }

    #[test]
    fn default_format_is_compact() {
        assert_eq!(Digits4.format(" 12 34 "), "1234");
    }

    #[test]
    fn object_safe() {
        let schemes: [&dyn NumberScheme; 1] = [&Digits4];
        assert_eq!(schemes[0].name(), "digits4");
    }
}
