use std::fmt;

/// Effect a rule has on a path it matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleAction {
    /// Exclude the matching path from the collection.
    Exclude,
    /// Re-include the matching path even if an earlier rule excluded it.
    Negate,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude => f.write_str("exclude"),
            Self::Negate => f.write_str("negate"),
        }
    }
}
