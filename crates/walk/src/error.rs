use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error returned when a walk cannot start.
///
/// Only root-level failures are fatal; per-entry failures during traversal
/// are reported as [`SkipNote`](crate::SkipNote) diagnostics instead.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_missing(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::RootMissing { path })
    }

    pub(crate) fn root_unreadable(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootUnreadable { path, source })
    }

    /// Returns the specific failure that prevented the walk.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::RootMissing { path } => {
                write!(
                    f,
                    "root '{}' does not exist or is not a directory",
                    path.display()
                )
            }
            WalkErrorKind::RootUnreadable { path, source } => {
                write!(
                    f,
                    "cannot read root directory '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::RootMissing { .. } => None,
            WalkErrorKind::RootUnreadable { source, .. } => Some(source),
        }
    }
}

/// Classification of fatal walk failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// The root path does not exist or is not a directory.
    RootMissing {
        /// The offending root path.
        path: PathBuf,
    },
    /// The root directory exists but cannot be listed.
    RootUnreadable {
        /// The offending root path.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}
