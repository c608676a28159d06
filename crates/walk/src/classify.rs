//! Text/binary classification.
//!
//! Classification looks at a bounded prefix of a file's bytes rather than the
//! whole file: a NUL byte anywhere in the probe marks the file binary, and
//! the probe must otherwise be valid UTF-8. A multi-byte sequence cut off by
//! the probe boundary is tolerated, since the cut point is arbitrary.

/// Number of leading bytes inspected when classifying a file.
pub const TEXT_PROBE_LEN: usize = 8 * 1024;

/// Returns `true` if `bytes` looks like text.
///
/// Only the first [`TEXT_PROBE_LEN`] bytes are inspected. Empty input is
/// text.
///
/// # Examples
///
/// ```
/// use walk::classify::is_text;
///
/// assert!(is_text(b"fn main() {}\n"));
/// assert!(is_text("héllo".as_bytes()));
/// assert!(!is_text(b"\x7fELF\x02\x01\x01\x00"));
/// ```
#[must_use]
pub fn is_text(bytes: &[u8]) -> bool {
    let probe = &bytes[..bytes.len().min(TEXT_PROBE_LEN)];
    if probe.contains(&0) {
        return false;
    }
    match std::str::from_utf8(probe) {
        Ok(_) => true,
        // An incomplete trailing sequence is only acceptable when the probe
        // boundary cut it off, not when the file itself ends mid-character.
        Err(error) => error.error_len().is_none() && bytes.len() > probe.len(),
    }
}
