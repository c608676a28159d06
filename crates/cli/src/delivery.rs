//! Payload delivery backends.
//!
//! Delivery is modelled as a capability: anything that can accept one text
//! payload. The clipboard implementation shells out to the platform's
//! clipboard helper the way the traditional tools do (`pbcopy` on macOS,
//! `xclip`/`xsel` on Linux, `clip` on Windows); the writer implementation
//! backs the `--no-clipboard` mode and the fallback path when no clipboard
//! helper is available.

use std::borrow::Cow;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

/// Capability to deliver one text payload.
pub trait TextSink {
    /// Delivers `payload`. Implementations attempt delivery at most once.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O failure when delivery is impossible, so
    /// the caller can degrade to another sink.
    fn deliver(&mut self, payload: &str) -> io::Result<()>;
}

/// Delivers the payload to the operating system clipboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipboardSink;

impl TextSink for ClipboardSink {
    fn deliver(&mut self, payload: &str) -> io::Result<()> {
        let mut commands = clipboard_commands();
        if commands.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "no clipboard integration for this platform",
            ));
        }

        let bytes = clipboard_bytes(payload);
        for command in &mut commands {
            match pipe_into(command, &bytes) {
                Ok(()) => return Ok(()),
                // The helper is not installed; try the next candidate.
                Err(error) if error.kind() == io::ErrorKind::NotFound => {
                    debug!(helper = ?command.get_program(), "clipboard helper not found");
                }
                Err(error) => return Err(error),
            }
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no clipboard helper available",
        ))
    }
}

/// Delivers the payload by writing it to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer` as a delivery target.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn deliver(&mut self, payload: &str) -> io::Result<()> {
        self.writer.write_all(payload.as_bytes())?;
        self.writer.flush()
    }
}

fn pipe_into(command: &mut Command, bytes: &[u8]) -> io::Result<()> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is always piped above; dropping the handle closes the pipe so
    // the helper sees end-of-input.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(bytes)?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "clipboard helper exited with {status}"
        )))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_commands() -> Vec<Command> {
    vec![Command::new("pbcopy")]
}

#[cfg(target_os = "linux")]
fn clipboard_commands() -> Vec<Command> {
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    let mut xsel = Command::new("xsel");
    xsel.args(["--clipboard", "--input"]);
    vec![xclip, xsel]
}

#[cfg(windows)]
fn clipboard_commands() -> Vec<Command> {
    vec![Command::new("clip")]
}

#[cfg(not(any(target_os = "macos", target_os = "linux", windows)))]
fn clipboard_commands() -> Vec<Command> {
    Vec::new()
}

/// `clip` consumes UTF-16LE with a byte-order mark; everything else takes
/// the payload verbatim.
#[cfg(windows)]
fn clipboard_bytes(payload: &str) -> Cow<'_, [u8]> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in payload.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    Cow::Owned(bytes)
}

#[cfg(not(windows))]
fn clipboard_bytes(payload: &str) -> Cow<'_, [u8]> {
    Cow::Borrowed(payload.as_bytes())
}
