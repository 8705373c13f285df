use std::fmt;

/// A malformed color string.
///
/// Hex colors are `#rrggbb` or `rrggbb`; anything else is rejected whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
    pub reason: String,
}

impl ParseColorError {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { input: input.into(), reason: reason.into() }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseColorError {}
