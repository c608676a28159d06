#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal at the heart of
//! `recopy`. The walker descends a directory tree depth-first, resolves one
//! ignore rule set per directory by layering any local ignore file on top of
//! the inherited rules, prunes excluded directories without entering them,
//! classifies surviving files as text or binary, and collects the textual
//! ones into an ordered [`CollectedReport`]. Ordering is kept stable across
//! platforms by sorting directory entries lexicographically before visiting
//! them, so two walks of an unmodified tree produce byte-identical reports.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options: the ignore file name,
//!   whether directory symlinks are followed, and whether empty files are
//!   skipped.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEvent`] values in
//!   depth-first order: [`WalkEvent::File`] for each collected record and
//!   [`WalkEvent::Skipped`] for each per-entry failure. Per-entry failures
//!   never terminate the iteration.
//! - [`walk`] is the one-call convenience that builds a walker for a root and
//!   drains it into a [`CollectedReport`].
//! - [`WalkError`] describes the only fatal failures: a root that is missing,
//!   is not a directory, or cannot be listed. Everything else becomes a
//!   [`SkipNote`].
//!
//! # Invariants
//!
//! - Emitted paths are always relative to the root and never contain `..`
//!   segments.
//! - An excluded directory is pruned: nothing beneath it is visited, read,
//!   or diagnosed, regardless of negations declared deeper in the tree.
//! - Directory symlinks whose canonical target is already on the active
//!   traversal stack are skipped with a cycle diagnostic, so traversal always
//!   terminates.
//! - Traversal never panics; unexpected filesystem failures surface as
//!   [`SkipNote`] diagnostics or, for the root, as [`WalkError`].
//!
//! # Examples
//!
//! Collect the text files of a small tree:
//!
//! ```
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("kept.txt"), "hello\n")?;
//! fs::create_dir(temp.path().join("logs"))?;
//! fs::write(temp.path().join("logs/run.log"), "line\n")?;
//! fs::write(temp.path().join("recopy.ignore"), "logs/\n")?;
//!
//! let report = walk::walk(temp.path())?;
//! let paths: Vec<_> = report
//!     .records()
//!     .iter()
//!     .map(|record| record.relative_path().to_path_buf())
//!     .collect();
//! assert_eq!(paths, vec![std::path::PathBuf::from("kept.txt")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - The `filters` crate for the ignore-rule grammar and evaluation order.
//! - The `cli` crate, which renders a [`CollectedReport`] and delivers it.

mod builder;
pub mod classify;
mod error;
mod report;
mod walker;

pub use builder::WalkBuilder;
pub use error::{WalkError, WalkErrorKind};
pub use report::{CollectedReport, FileRecord, SkipNote, SkipReason};
pub use walker::{WalkEvent, Walker};

use std::path::PathBuf;

/// Walks `root` and collects every surviving text file into a report.
///
/// Equivalent to building a default [`Walker`] for `root` and draining it.
///
/// # Errors
///
/// Returns [`WalkError`] when the root is missing, is not a directory, or
/// cannot be listed. Per-entry failures do not abort the walk; they are
/// recorded in the report's skip diagnostics.
pub fn walk<P: Into<PathBuf>>(root: P) -> Result<CollectedReport, WalkError> {
    Ok(WalkBuilder::new(root).build()?.collect_report())
}
