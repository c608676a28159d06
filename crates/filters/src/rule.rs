use crate::RuleAction;

/// User-visible ignore rule consisting of an action and pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IgnoreRule {
    pub(crate) action: RuleAction,
    pub(crate) pattern: String,
}

impl IgnoreRule {
    /// Creates an exclude rule for `pattern`.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Exclude,
            pattern: pattern.into(),
        }
    }

    /// Creates a negation rule for `pattern`.
    ///
    /// Negations re-include paths that an earlier rule in the same effective
    /// set excluded. The pattern is stored without the `!` prefix.
    #[must_use]
    pub fn negate(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Negate,
            pattern: pattern.into(),
        }
    }

    /// Parses one ignore-file line that has already been stripped of trailing
    /// whitespace.
    ///
    /// Returns `None` for lines that declare no rule: blank lines, `#`
    /// comments, and a bare `!`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        if let Some(rest) = line.strip_prefix('!') {
            if rest.is_empty() {
                return None;
            }
            return Some(Self::negate(rest));
        }
        Some(Self::exclude(line))
    }

    /// Returns the rule action.
    #[must_use]
    pub const fn action(&self) -> RuleAction {
        self.action
    }

    /// Returns the pattern text associated with the rule.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
