use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::{IgnoreRule, PatternError, RuleAction};

/// Compiled form of one [`IgnoreRule`].
///
/// The pattern text is expanded into two glob matchers: `exact` covers the
/// rule itself and `descend` covers every path beneath a directory the rule
/// matches, so excluding (or re-including) a directory carries over to its
/// contents.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    pub(crate) action: RuleAction,
    dir_only: bool,
    exact: GlobMatcher,
    descend: GlobMatcher,
}

impl CompiledRule {
    /// Compiles `rule` into glob matchers.
    ///
    /// A trailing `/` marks the rule directory-only. A pattern containing a
    /// separator is anchored to the rule's declaration directory; otherwise
    /// the pattern matches the basename at any depth, which is expressed by
    /// prefixing `**/` before handing the glob to [`globset`].
    pub(crate) fn new(rule: &IgnoreRule) -> Result<Self, PatternError> {
        let pattern = rule.pattern.as_str();
        let (body, dir_only) = match pattern.strip_suffix('/') {
            Some(body) => (body, true),
            None => (pattern, false),
        };
        let (body, anchored) = match body.strip_prefix('/') {
            Some(body) => (body, true),
            None => (body, body.contains('/')),
        };

        let glob = if anchored {
            body.to_owned()
        } else {
            format!("**/{body}")
        };

        let exact = compile(pattern, &glob)?;
        let descend = compile(pattern, &format!("{glob}/**"))?;

        Ok(Self {
            action: rule.action,
            dir_only,
            exact,
            descend,
        })
    }

    /// Tests `path` (relative to the rule's declaration directory) against
    /// the rule. `is_dir` reports whether the path names a directory, which
    /// gates directory-only rules.
    pub(crate) fn matches(&self, path: &Path, is_dir: bool) -> bool {
        if (is_dir || !self.dir_only) && self.exact.is_match(path) {
            return true;
        }
        self.descend.is_match(path)
    }
}

fn compile(pattern: &str, glob: &str) -> Result<GlobMatcher, PatternError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| PatternError::new(pattern.to_owned(), source))
}
