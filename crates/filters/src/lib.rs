#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides ordered exclude/negate pattern evaluation for the
//! `recopy` workspace. The implementation reproduces the ignore-file grammar
//! that governs which files survive a collection walk: one glob pattern per
//! line, `#` comments, a `!` prefix for negations, a trailing `/` for
//! directory-only rules, and `*`/`**`/`?`/`[...]` wildcards with the glob
//! semantics exposed by [`globset`]. Rules are evaluated sequentially with the
//! last matching rule determining whether a path is excluded.
//!
//! # Design
//!
//! - [`IgnoreRule`] captures the user-supplied action (`Exclude`/`Negate`) and
//!   pattern text. The rule itself is lightweight; heavy lifting happens when
//!   a [`RuleSet`] is constructed.
//! - [`RuleSet`] owns the compiled representation of each rule together with
//!   the directory scope the rule was declared in. A child directory's
//!   effective set is produced by [`RuleSet::extended`], which appends the
//!   child's local rules to the parent's without mutating the parent. Sets are
//!   cheaply cloneable (the inner state is behind an `Arc`), so a traversal
//!   can hand immutable values down its call stack.
//! - Matching occurs against paths relative to the walk root using native
//!   [`std::path::Path`] semantics so callers can operate directly on
//!   `std::path::PathBuf` instances without additional conversions.
//!
//! # Invariants
//!
//! - Rules are applied in declaration order: parent rules first, then local
//!   rules, each group in the order it was read. The last matching rule wins
//!   and paths matching no rule are included.
//! - A trailing `/` marks a directory-only rule. The directory itself must
//!   match the rule to trigger exclusion; descendants are excluded
//!   automatically.
//! - A pattern containing a `/` is anchored to its declaration directory.
//!   Patterns without a separator match the basename at any depth beneath
//!   that directory.
//! - A rule only applies to paths inside the directory it was declared in.
//!
//! # Errors
//!
//! Compiling a rule reports [`PatternError`] when the pattern expands to an
//! invalid glob expression. The error includes the offending pattern and the
//! underlying [`globset::Error`] for debugging. [`RuleSet::extended`] drops
//! such rules and returns them as diagnostics instead of failing, matching
//! the contract that a malformed ignore line never aborts a walk. Reading an
//! ignore file reports [`IgnoreFileError`] on I/O failure.
//!
//! # Examples
//!
//! Build a rule set that excludes log files while re-including one of them:
//!
//! ```
//! use filters::{IgnoreRule, RuleSet};
//! use std::path::Path;
//!
//! let rules = [
//!     IgnoreRule::exclude("*.log"),
//!     IgnoreRule::negate("keep.log"),
//! ];
//! let set = RuleSet::from_rules(rules).expect("rules compile");
//!
//! assert!(set.is_excluded(Path::new("build.log"), false));
//! assert!(set.is_excluded(Path::new("sub/build.log"), false));
//! assert!(!set.is_excluded(Path::new("sub/keep.log"), false));
//! assert!(!set.is_excluded(Path::new("notes.txt"), false));
//! ```
//!
//! # See also
//!
//! - The `walk` crate, which resolves one [`RuleSet`] per directory during
//!   traversal and prunes excluded directories.
//! - [`globset`] for the glob matching primitives used internally.

mod action;
mod compiled;
mod error;
pub mod merge;
mod rule;
mod set;

pub use action::RuleAction;
pub use error::PatternError;
pub use merge::{IGNORE_FILE_NAME, IgnoreFileError, parse_rules, read_rules};
pub use rule::IgnoreRule;
pub use set::RuleSet;
