#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for `recopy`. The crate is
//! intentionally thin: it parses the supported switches, hands the walk to
//! the `walk` crate, renders the collected report, and delivers the payload
//! through one of the pluggable [`TextSink`] backends (operating-system
//! clipboard, or standard output with `--no-clipboard` and as the fallback
//! when no clipboard helper is available).
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so the whole surface is testable against in-memory buffers. A
//! [`clap`](https://docs.rs/clap/) command definition performs the parse;
//! help and version requests are answered without touching the filesystem.
//!
//! # Invariants
//!
//! - [`run`] never panics; failures surface as non-zero exit codes with a
//!   diagnostic on standard error.
//! - Delivery is attempted at most once per invocation. A clipboard failure
//!   degrades to printing the payload on standard output; it never aborts.
//! - The summary (files collected, entries skipped) is reported after
//!   delivery, so the payload itself stays uncontaminated.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(["recopy", "--help"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - The `walk` crate for traversal semantics and the report data model.
//! - `src/bin/recopy.rs` in the workspace root, which wires [`run`] into
//!   `main`.

mod delivery;
mod render;

pub use delivery::{ClipboardSink, TextSink, WriterSink};
pub use render::render_report;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, value_parser};
use tracing_subscriber::EnvFilter;
use walk::{CollectedReport, WalkBuilder};

/// Process exit code for successful runs, including delivery fallbacks.
pub const EXIT_OK: i32 = 0;
/// Process exit code for argument errors and fatal walk failures.
pub const EXIT_FAILURE: i32 = 1;

/// Environment variable consulted for the tracing filter.
const LOG_ENV: &str = "RECOPY_LOG";

/// Runs the command-line front-end.
///
/// `args` must include the program name as its first element, mirroring
/// `std::env::args_os`. Diagnostics go to `stderr`; the payload (in
/// `--no-clipboard` and fallback modes) and the delivery summary go to
/// `stdout`. Returns the process exit code.
pub fn run<Args, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator,
    Args::Item: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    init_tracing();

    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{rendered}");
                    EXIT_OK
                }
                _ => {
                    let _ = write!(stderr, "{rendered}");
                    EXIT_FAILURE
                }
            };
        }
    };

    let root = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let ignore_file = matches
        .get_one::<String>("ignore-file")
        .cloned()
        .unwrap_or_else(|| filters::IGNORE_FILE_NAME.to_owned());

    let built = WalkBuilder::new(root)
        .ignore_file_name(ignore_file)
        .follow_symlinks(!matches.get_flag("no-follow-symlinks"))
        .skip_empty(matches.get_flag("skip-empty"))
        .build();

    let report = match built {
        Ok(walker) => walker.collect_report(),
        Err(error) => {
            let _ = writeln!(stderr, "recopy: {error}");
            return EXIT_FAILURE;
        }
    };

    let payload = render_report(&report);

    if matches.get_flag("no-clipboard") {
        if let Err(error) = WriterSink::new(&mut *stdout).deliver(&payload) {
            let _ = writeln!(stderr, "recopy: failed to write payload: {error}");
            return EXIT_FAILURE;
        }
    } else {
        match ClipboardSink.deliver(&payload) {
            Ok(()) => {
                let _ = writeln!(stdout, "copied {} files to clipboard", report.len());
            }
            Err(error) => {
                let _ = writeln!(
                    stderr,
                    "recopy: warning: could not copy to clipboard ({error}); \
                     printing to standard output"
                );
                if let Err(error) = WriterSink::new(&mut *stdout).deliver(&payload) {
                    let _ = writeln!(stderr, "recopy: failed to write payload: {error}");
                    return EXIT_FAILURE;
                }
            }
        }
    }

    report_summary(&report, matches.get_flag("stats"), stderr);

    EXIT_OK
}

/// Writes the post-delivery summary: the skip count, each skipped entry, and
/// (with `--stats`) per-category totals.
fn report_summary<ErrOut: Write>(report: &CollectedReport, stats: bool, stderr: &mut ErrOut) {
    if !report.skipped().is_empty() {
        let _ = writeln!(stderr, "skipped {} entries", report.skipped().len());
        for note in report.skipped() {
            let _ = writeln!(stderr, "  {note}");
        }
    }

    if stats {
        let mut by_label = BTreeMap::new();
        for note in report.skipped() {
            *by_label.entry(note.reason().label()).or_insert(0usize) += 1;
        }
        let _ = writeln!(stderr, "statistics:");
        let _ = writeln!(stderr, "  files collected: {}", report.len());
        let _ = writeln!(stderr, "  entries skipped: {}", report.skipped().len());
        for (label, count) in by_label {
            let _ = writeln!(stderr, "    {label}: {count}");
        }
    }
}

fn command() -> Command {
    Command::new("recopy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recursively collects text file contents and copies them to the clipboard")
        .arg(
            Arg::new("dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(".")
                .help("Directory to collect from"),
        )
        .arg(
            Arg::new("no-clipboard")
                .long("no-clipboard")
                .action(ArgAction::SetTrue)
                .help("Print the report to standard output instead of the clipboard"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Print collection statistics to standard error"),
        )
        .arg(
            Arg::new("ignore-file")
                .long("ignore-file")
                .value_name("NAME")
                .default_value(filters::IGNORE_FILE_NAME)
                .help("Per-directory ignore file name"),
        )
        .arg(
            Arg::new("skip-empty")
                .long("skip-empty")
                .action(ArgAction::SetTrue)
                .help("Omit files whose content is empty or whitespace-only"),
        )
        .arg(
            Arg::new("no-follow-symlinks")
                .long("no-follow-symlinks")
                .action(ArgAction::SetTrue)
                .help("Do not descend into directory symlinks"),
        )
}

/// Installs the tracing subscriber when `RECOPY_LOG` is set. Logging is
/// strictly opt-in; the summary on standard error covers the common case.
fn init_tracing() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::command;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }
}
