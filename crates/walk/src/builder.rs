use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::WalkError;
use crate::walker::Walker;

/// Configures a collection walk rooted at a specific path.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    ignore_file: OsString,
    follow_symlinks: bool,
    skip_empty: bool,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ignore_file: OsString::from(filters::IGNORE_FILE_NAME),
            follow_symlinks: true,
            skip_empty: false,
        }
    }

    /// Overrides the per-directory ignore file name.
    #[must_use]
    pub fn ignore_file_name(mut self, name: impl Into<OsString>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Configures whether directory symlinks should be traversed.
    ///
    /// The walker follows them by default; canonical paths on the active
    /// traversal stack guard against cycles either way.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Configures whether files with empty or whitespace-only content are
    /// dropped from the report. Disabled by default.
    #[must_use]
    pub const fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] when the root does not exist, is not a
    /// directory, or cannot be listed. These are the only fatal conditions;
    /// everything encountered during iteration degrades to a skip
    /// diagnostic.
    pub fn build(self) -> Result<Walker, WalkError> {
        let root = absolutize(self.root)?;
        let metadata = fs::metadata(&root).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                WalkError::root_missing(root.clone())
            } else {
                WalkError::root_unreadable(root.clone(), error)
            }
        })?;
        if !metadata.is_dir() {
            return Err(WalkError::root_missing(root));
        }
        let canonical = fs::canonicalize(&root)
            .map_err(|error| WalkError::root_unreadable(root.clone(), error))?;

        Walker::new(
            root,
            canonical,
            self.ignore_file,
            self.follow_symlinks,
            self.skip_empty,
        )
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir()
            .map_err(|error| WalkError::root_unreadable(PathBuf::from("."), error))?;
        Ok(cwd.join(path))
    }
}
