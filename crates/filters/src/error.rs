use std::fmt;

/// Error produced when a rule cannot be compiled into a matcher.
#[derive(Debug)]
pub struct PatternError {
    pattern: String,
    source: globset::Error,
}

impl PatternError {
    /// Creates a new [`PatternError`] for the given pattern and source error.
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile ignore pattern '{}': {}",
            self.pattern, self.source
        )
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
