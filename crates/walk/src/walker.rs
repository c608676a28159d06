use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filters::RuleSet;
use tracing::{debug, trace, warn};

use crate::classify;
use crate::error::WalkError;
use crate::report::{CollectedReport, FileRecord, SkipNote, SkipReason};

/// One step of a collection walk.
#[derive(Debug)]
pub enum WalkEvent {
    /// A file survived the ignore rules and the text classifier.
    File(FileRecord),
    /// An entry was passed over; the walk continues.
    Skipped(SkipNote),
}

/// Depth-first iterator over the surviving files of a directory tree.
///
/// Built by [`WalkBuilder`](crate::WalkBuilder). Each yielded
/// [`WalkEvent::File`] carries a collected record; per-entry failures are
/// yielded as [`WalkEvent::Skipped`] and never terminate the iteration.
pub struct Walker {
    ignore_file: OsString,
    follow_symlinks: bool,
    skip_empty: bool,
    stack: Vec<DirectoryState>,
    pending: VecDeque<SkipNote>,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        canonical: PathBuf,
        ignore_file: OsString,
        follow_symlinks: bool,
        skip_empty: bool,
    ) -> Result<Self, WalkError> {
        debug!(root = %root.display(), "starting collection walk");

        let mut walker = Self {
            ignore_file,
            follow_symlinks,
            skip_empty,
            stack: Vec::new(),
            pending: VecDeque::new(),
        };

        let state = DirectoryState::new(
            &root,
            PathBuf::new(),
            canonical,
            &RuleSet::new(),
            &walker.ignore_file,
            &mut walker.pending,
        )
        .map_err(|error| WalkError::root_unreadable(root, error))?;
        walker.stack.push(state);

        Ok(walker)
    }

    /// Drains the walker into a [`CollectedReport`].
    #[must_use]
    pub fn collect_report(self) -> CollectedReport {
        let mut report = CollectedReport::default();
        for event in self {
            match event {
                WalkEvent::File(record) => report.push_record(record),
                WalkEvent::Skipped(note) => report.push_skip(note),
            }
        }
        report
    }

    /// Handles one directory entry. Returns `None` when there is nothing to
    /// yield for it (descended into, pruned, or not a regular file).
    fn visit(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        rules: &RuleSet,
        parent_canonical: &Path,
    ) -> Option<WalkEvent> {
        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(error) => {
                return Some(WalkEvent::Skipped(SkipNote::new(
                    relative_path,
                    SkipReason::Metadata(error),
                )));
            }
        };
        let file_type = metadata.file_type();

        if file_type.is_symlink() {
            return self.visit_symlink(full_path, relative_path, rules);
        }

        if file_type.is_dir() {
            if rules.is_excluded(&relative_path, true) {
                trace!(directory = %relative_path.display(), "pruned excluded directory");
                return None;
            }
            let canonical = match full_path.file_name() {
                Some(name) => parent_canonical.join(name),
                None => parent_canonical.to_owned(),
            };
            self.push_directory(full_path, relative_path, canonical, rules);
            return None;
        }

        if file_type.is_file() {
            if rules.is_excluded(&relative_path, false) {
                return None;
            }
            return self.read_file(&full_path, relative_path);
        }

        // Sockets, fifos, and devices carry no collectable text.
        trace!(path = %relative_path.display(), "skipping non-regular file");
        None
    }

    fn visit_symlink(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        rules: &RuleSet,
    ) -> Option<WalkEvent> {
        let target = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(error) => {
                return Some(WalkEvent::Skipped(SkipNote::new(
                    relative_path,
                    SkipReason::BrokenSymlink(error),
                )));
            }
        };

        if target.is_dir() {
            if !self.follow_symlinks {
                trace!(path = %relative_path.display(), "not following directory symlink");
                return None;
            }
            if rules.is_excluded(&relative_path, true) {
                return None;
            }
            let canonical = match fs::canonicalize(&full_path) {
                Ok(canonical) => canonical,
                Err(error) => {
                    return Some(WalkEvent::Skipped(SkipNote::new(
                        relative_path,
                        SkipReason::BrokenSymlink(error),
                    )));
                }
            };
            if self.stack.iter().any(|state| state.canonical == canonical) {
                warn!(path = %relative_path.display(), "skipping symlink cycle");
                return Some(WalkEvent::Skipped(SkipNote::new(
                    relative_path,
                    SkipReason::SymlinkCycle,
                )));
            }
            self.push_directory(full_path, relative_path, canonical, rules);
            return None;
        }

        if target.is_file() {
            if rules.is_excluded(&relative_path, false) {
                return None;
            }
            return self.read_file(&full_path, relative_path);
        }

        None
    }

    fn push_directory(
        &mut self,
        fs_path: PathBuf,
        relative_path: PathBuf,
        canonical: PathBuf,
        parent_rules: &RuleSet,
    ) {
        match DirectoryState::new(
            &fs_path,
            relative_path.clone(),
            canonical,
            parent_rules,
            &self.ignore_file,
            &mut self.pending,
        ) {
            Ok(state) => {
                debug!(directory = %relative_path.display(), "entering directory");
                self.stack.push(state);
            }
            Err(error) => {
                warn!(directory = %relative_path.display(), "cannot list directory: {error}");
                self.pending.push_back(SkipNote::new(
                    relative_path,
                    SkipReason::UnlistableDirectory(error),
                ));
            }
        }
    }

    fn read_file(&self, full_path: &Path, relative_path: PathBuf) -> Option<WalkEvent> {
        let bytes = match fs::read(full_path) {
            Ok(bytes) => bytes,
            Err(error) => {
                return Some(WalkEvent::Skipped(SkipNote::new(
                    relative_path,
                    SkipReason::Unreadable(error),
                )));
            }
        };
        if !classify::is_text(&bytes) {
            return Some(WalkEvent::Skipped(SkipNote::new(
                relative_path,
                SkipReason::Binary,
            )));
        }
        let contents = String::from_utf8_lossy(&bytes).into_owned();
        if self.skip_empty && contents.trim().is_empty() {
            trace!(file = %relative_path.display(), "skipping empty file");
            return None;
        }
        trace!(file = %relative_path.display(), bytes = contents.len(), "collected file");
        Some(WalkEvent::File(FileRecord::new(relative_path, contents)))
    }
}

impl Iterator for Walker {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(note) = self.pending.pop_front() {
                return Some(WalkEvent::Skipped(note));
            }

            let (full_path, relative_path, rules, parent_canonical) = {
                let state = self.stack.last_mut()?;

                let Some(name) = state.next_name() else {
                    self.stack.pop();
                    continue;
                };
                if name == self.ignore_file {
                    // The ignore file is configuration, not payload.
                    continue;
                }

                let full_path = state.fs_path.join(&name);
                let relative_path = if state.relative_prefix.as_os_str().is_empty() {
                    PathBuf::from(&name)
                } else {
                    let mut rel = state.relative_prefix.clone();
                    rel.push(&name);
                    rel
                };
                (
                    full_path,
                    relative_path,
                    state.rules.clone(),
                    state.canonical.clone(),
                )
            };

            if let Some(event) = self.visit(full_path, relative_path, &rules, &parent_canonical) {
                return Some(event);
            }
        }
    }
}

#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    canonical: PathBuf,
    rules: RuleSet,
    entries: Vec<OsString>,
    index: usize,
}

impl DirectoryState {
    /// Lists `fs_path`, sorts its entries for deterministic iteration, and
    /// resolves the directory's effective rule set by layering any local
    /// ignore file on top of the parent's rules. Ignore-file problems are
    /// queued on `pending`; only the directory listing itself can fail.
    fn new(
        fs_path: &Path,
        relative_prefix: PathBuf,
        canonical: PathBuf,
        parent_rules: &RuleSet,
        ignore_file: &OsStr,
        pending: &mut VecDeque<SkipNote>,
    ) -> io::Result<Self> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(fs_path)? {
            entries.push(entry?.file_name());
        }
        entries.sort();
        trace!(
            directory = %fs_path.display(),
            entries = entries.len(),
            "listed directory"
        );

        let ignore_path = fs_path.join(ignore_file);
        let rules = if ignore_path.is_file() {
            match filters::read_rules(&ignore_path) {
                Ok(local) => {
                    let (rules, skipped) = parent_rules.extended(&relative_prefix, local);
                    for error in skipped {
                        pending.push_back(SkipNote::new(
                            relative_prefix.join(ignore_file),
                            SkipReason::InvalidPattern {
                                pattern: error.pattern().to_owned(),
                            },
                        ));
                    }
                    rules
                }
                Err(error) => {
                    warn!("{error}");
                    pending.push_back(SkipNote::new(
                        relative_prefix.join(ignore_file),
                        SkipReason::Unreadable(error.into_source()),
                    ));
                    parent_rules.clone()
                }
            }
        } else {
            parent_rules.clone()
        };

        Ok(Self {
            fs_path: fs_path.to_owned(),
            relative_prefix,
            canonical,
            rules,
            entries,
            index: 0,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        if let Some(name) = self.entries.get(self.index) {
            self.index += 1;
            Some(name.clone())
        } else {
            None
        }
    }
}
