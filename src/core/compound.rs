//! Dispatch over a union of mutually exclusive sub-schemes.

use super::error::{ErrorKind, ValidationError};
use super::scheme::NumberScheme;

/// A number that is really one of several structurally distinct sub-schemes.
///
/// Candidates are tried in table order and the first success wins. A
/// candidate that fails with [`ValidationError::InvalidChecksum`] has
/// recognised the input as its own, so its error is returned without
/// consulting later candidates; any other failure moves on to the next one.
/// When nobody accepts the input the most specific recorded error is
/// returned, earliest candidate first on ties.
///
/// Sub-schemes must not accept overlapping valid input. Use
/// [`matching_types`](Self::matching_types) to audit a table.
///
/// ```rust
/// use pruefziffer::{Compound, NumberScheme, ValidationError};
///
/// struct Even;
/// struct Odd;
///
/// impl NumberScheme for Even {
///     fn name(&self) -> &'static str { "even" }
///     fn compact(&self, raw: &str) -> String { raw.trim().to_string() }
///     fn validate(&self, raw: &str) -> Result<String, ValidationError> {
///         let n: u32 = raw.trim().parse().map_err(|_| ValidationError::format("not a number"))?;
///         if n % 2 == 0 { Ok(n.to_string()) } else { Err(ValidationError::component("odd")) }
///     }
/// }
///
/// impl NumberScheme for Odd {
///     fn name(&self) -> &'static str { "odd" }
///     fn compact(&self, raw: &str) -> String { raw.trim().to_string() }
///     fn validate(&self, raw: &str) -> Result<String, ValidationError> {
///         let n: u32 = raw.trim().parse().map_err(|_| ValidationError::format("not a number"))?;
///         if n % 2 == 1 { Ok(n.to_string()) } else { Err(ValidationError::component("even")) }
///     }
/// }
///
/// static PARITY: Compound<'static> = Compound::new("parity", &[&Even, &Odd]);
///
/// assert_eq!(PARITY.guess_type("7"), Some("odd"));
/// assert_eq!(PARITY.validate(" 7 ").unwrap(), "7");
/// ```
pub struct Compound<'a> {
    name: &'static str,
    candidates: &'a [&'a dyn NumberScheme],
}

impl<'a> Compound<'a> {
    /// Create a dispatcher over `candidates`, tried in order.
    pub const fn new(name: &'static str, candidates: &'a [&'a dyn NumberScheme]) -> Self {
        Self { name, candidates }
    }

    /// The candidate table.
    pub fn candidates(&self) -> &'a [&'a dyn NumberScheme] {
        self.candidates
    }

    /// Name of the first candidate accepting `raw`.
    pub fn guess_type(&self, raw: &str) -> Option<&'static str> {
        self.candidates
            .iter()
            .find(|c| c.is_valid(raw))
            .map(|c| c.name())
    }

    /// Names of every candidate accepting `raw`.
    ///
    /// For a well-formed table this has at most one entry.
    pub fn matching_types(&self, raw: &str) -> Vec<&'static str> {
        self.candidates
            .iter()
            .filter(|c| c.is_valid(raw))
            .map(|c| c.name())
            .collect()
    }

    fn dispatch(&self, raw: &str) -> Result<String, ValidationError> {
        let mut best: Option<ValidationError> = None;
        for candidate in self.candidates {
            match candidate.validate(raw) {
                Ok(number) => {
                    tracing::debug!(scheme = self.name, candidate = candidate.name(), "accepted");
                    return Ok(number);
                }
                Err(e) if e.kind() == ErrorKind::InvalidChecksum => {
                    tracing::debug!(
                        scheme = self.name,
                        candidate = candidate.name(),
                        error = %e,
                        "claimed with bad checksum"
                    );
                    return Err(e);
                }
                Err(e) => {
                    tracing::debug!(
                        scheme = self.name,
                        candidate = candidate.name(),
                        error = %e,
                        "rejected"
                    );
                    if best.as_ref().is_none_or(|b| e.kind() > b.kind()) {
                        best = Some(e);
                    }
                }
            }
        }
        Err(best.unwrap_or_else(|| {
            ValidationError::format(format!("{} has no candidate schemes", self.name))
        }))
    }
}

impl NumberScheme for Compound<'_> {
    fn name(&self) -> &'static str {
        self.name
    }

    /// Compacts with the first candidate.
    fn compact(&self, raw: &str) -> String {
        match self.candidates.first() {
            Some(first) => first.compact(raw),
            None => raw.trim().to_string(),
        }
    }

    fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        self.dispatch(raw)
    }

    /// Formats with the candidate that accepts `raw`, else the first one.
    fn format(&self, raw: &str) -> String {
        let chosen = self
            .candidates
            .iter()
            .find(|c| c.is_valid(raw))
            .or_else(|| self.candidates.first());
        match chosen {
            Some(c) => c.format(raw),
            None => self.compact(raw),
        }
    }
}

impl std::fmt::Debug for Compound<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.candidates.iter().map(|c| c.name()).collect();
        f.debug_struct("Compound")
            .field("name", &self.name)
            .field("candidates", &names)
            .finish()
    }
}
