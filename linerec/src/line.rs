//! Line framing.
//!
//! A line is a blob in standard base64 (with `=` padding), followed by [`LINE_TERMINATOR`].
//! The base64 alphabet excludes `\n`, so one line always holds exactly one blob,
//! whatever bytes the blob contains.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const LINE_TERMINATOR: u8 = b'\n';

/// Appends the encoded line, including its terminator, to `line`.
pub fn encode_line(blob: &[u8], line: &mut Vec<u8>) {
    line.extend_from_slice(STANDARD.encode(blob).as_bytes());
    line.push(LINE_TERMINATOR);
}

/// Decodes one line, with or without its terminator.
///
/// A `\r` immediately before the terminator is dropped as well.
pub fn decode_line(line: &[u8]) -> Result<Vec<u8>> {
    let mut text = line;
    if let Some(stripped) = text.strip_suffix(&[LINE_TERMINATOR]) {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix(b"\r") {
        text = stripped;
    }
    STANDARD.decode(text).context("Invalid base64 line")
}
