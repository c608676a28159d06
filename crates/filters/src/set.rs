use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::{IgnoreRule, PatternError, RuleAction, compiled::CompiledRule};

/// Compiled, immutable collection of ignore rules for fast path matching.
///
/// A `RuleSet` is built from a sequence of [`IgnoreRule`]s and records, for
/// every rule, the directory scope it was declared in. Evaluation walks the
/// rules in declaration order; the last rule that matches a path decides
/// whether the path is excluded ([`RuleAction::Exclude`]) or re-included
/// ([`RuleAction::Negate`]). Paths matching no rule are included.
///
/// `RuleSet` is cheaply cloneable (the inner state is behind an [`Arc`]) and
/// never mutated in place: [`extended`](Self::extended) produces a new value
/// holding the parent's rules followed by the local ones, which is how a
/// traversal composes nested ignore files without shared mutable state.
///
/// # Examples
///
/// ```
/// use filters::{IgnoreRule, RuleSet};
/// use std::path::Path;
///
/// let set = RuleSet::from_rules([
///     IgnoreRule::exclude("*.o"),
///     IgnoreRule::negate("important.o"),
/// ]).unwrap();
///
/// // last-match-wins: the negation re-includes important.o
/// assert!(set.is_excluded(Path::new("main.o"), false));
/// assert!(!set.is_excluded(Path::new("important.o"), false));
/// // non-matching paths are included by default
/// assert!(!set.is_excluded(Path::new("README.md"), false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    inner: Arc<RuleSetInner>,
}

#[derive(Debug, Default)]
struct RuleSetInner {
    rules: Vec<ScopedRule>,
}

#[derive(Clone, Debug)]
struct ScopedRule {
    /// Directory the rule was declared in, relative to the walk root. Empty
    /// for rules declared at the root.
    scope: PathBuf,
    rule: CompiledRule,
}

impl RuleSet {
    /// Creates an empty rule set that includes every path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a root-scoped [`RuleSet`] from the supplied rules.
    ///
    /// Rules are compiled in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if any rule's pattern cannot be compiled into
    /// a valid glob matcher. Walks use the lenient [`extended`](Self::extended)
    /// instead, which drops malformed rules and reports them as diagnostics.
    pub fn from_rules<I>(rules: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = IgnoreRule>,
    {
        let mut compiled = Vec::new();
        for rule in rules {
            compiled.push(ScopedRule {
                scope: PathBuf::new(),
                rule: CompiledRule::new(&rule)?,
            });
        }
        Ok(Self {
            inner: Arc::new(RuleSetInner { rules: compiled }),
        })
    }

    /// Returns a new set holding this set's rules followed by `rules`, each
    /// scoped to `scope` (the declaring directory, relative to the walk
    /// root).
    ///
    /// Malformed patterns are dropped with a warning and returned alongside
    /// the new set so callers can surface them as per-entry diagnostics; a
    /// bad line in an ignore file never aborts a walk.
    #[must_use]
    pub fn extended<I>(&self, scope: &Path, rules: I) -> (Self, Vec<PatternError>)
    where
        I: IntoIterator<Item = IgnoreRule>,
    {
        let mut combined = self.inner.rules.clone();
        let mut skipped = Vec::new();

        for rule in rules {
            match CompiledRule::new(&rule) {
                Ok(compiled) => combined.push(ScopedRule {
                    scope: scope.to_owned(),
                    rule: compiled,
                }),
                Err(error) => {
                    warn!(
                        scope = %scope.display(),
                        pattern = error.pattern(),
                        "skipping malformed ignore pattern: {error}"
                    );
                    skipped.push(error);
                }
            }
        }

        (
            Self {
                inner: Arc::new(RuleSetInner { rules: combined }),
            },
            skipped,
        )
    }

    /// Returns `true` if the set contains no rules.
    ///
    /// An empty rule set includes all paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.rules.is_empty()
    }

    /// Returns the number of compiled rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.rules.len()
    }

    /// Returns `true` if `path` (relative to the walk root) is excluded.
    ///
    /// Rules are evaluated in declaration order with last-match-wins
    /// semantics; a rule only applies to paths inside its declaration
    /// directory. `is_dir` should be `true` when the path refers to a
    /// directory, which affects directory-only rules (patterns with a
    /// trailing `/`).
    #[must_use]
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        let verdict = self.inner.rules.iter().rev().find_map(|scoped| {
            let local = path.strip_prefix(&scoped.scope).ok()?;
            scoped
                .rule
                .matches(local, is_dir)
                .then_some(scoped.rule.action)
        });
        matches!(verdict, Some(RuleAction::Exclude))
    }
}
