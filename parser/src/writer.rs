//! JSON emission. This is a direct-to-writer pretty printer, not a
//! general-purpose JSON library: the decoder knows exactly what shape it
//! is producing at each call site, so there is no intermediate tree to
//! build.
//!
//! SET members go on separate lines, tab-indented; ARRAY elements go on
//! one line separated by `", "`. Both layouts are fixed and not
//! configurable.

use bej_core::error::{IoSnafu, Result};
use snafu::ResultExt;
use std::io::Write;

/// A thin wrapper around a [`Write`] sink that tracks indentation depth
/// and knows how to escape JSON strings. Analogous in spirit to the
/// teacher's `Printer<W, E, T>`, minus the DICOM-specific codec/text
/// layers this format does not need.
#[derive(Debug)]
pub struct JsonWriter<W> {
    to: W,
    indent: usize,
}

impl<W: Write> JsonWriter<W> {
    /// Wrap `to` with indentation depth `0`.
    pub fn new(to: W) -> Self {
        JsonWriter { to, indent: 0 }
    }

    /// Write `s` verbatim.
    pub fn write_raw(&mut self, s: &str) -> Result<()> {
        self.to.write_all(s.as_bytes()).context(IoSnafu)
    }

    /// Write one tab character per current indentation level.
    pub fn write_indent(&mut self) -> Result<()> {
        for _ in 0..self.indent {
            self.to.write_all(b"\t").context(IoSnafu)?;
        }
        Ok(())
    }

    /// Increase the indentation depth by one level.
    pub fn indent_in(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation depth by one level.
    pub fn indent_out(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write `s` as a JSON string literal, quotes included, with control
    /// characters escaped.
    pub fn write_json_string(&mut self, s: &str) -> Result<()> {
        self.to.write_all(b"\"").context(IoSnafu)?;
        for byte in s.bytes() {
            match byte {
                b'"' => self.to.write_all(b"\\\"").context(IoSnafu)?,
                b'\\' => self.to.write_all(b"\\\\").context(IoSnafu)?,
                0x08 => self.to.write_all(b"\\b").context(IoSnafu)?,
                0x0C => self.to.write_all(b"\\f").context(IoSnafu)?,
                b'\n' => self.to.write_all(b"\\n").context(IoSnafu)?,
                b'\r' => self.to.write_all(b"\\r").context(IoSnafu)?,
                b'\t' => self.to.write_all(b"\\t").context(IoSnafu)?,
                b if b < 0x20 => {
                    let escaped = format!("\\u{:04x}", b);
                    self.to.write_all(escaped.as_bytes()).context(IoSnafu)?
                }
                b => self.to.write_all(&[b]).context(IoSnafu)?,
            }
        }
        self.to.write_all(b"\"").context(IoSnafu)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.to.flush().context(IoSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_control_characters_and_quotes() {
        let mut out = Vec::new();
        {
            let mut w = JsonWriter::new(&mut out);
            w.write_json_string("a\"b\\c\n\t\u{01}").unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"a\\\"b\\\\c\\n\\t\\u0001\""
        );
    }

    #[test]
    fn empty_string_round_trips() {
        let mut out = Vec::new();
        {
            let mut w = JsonWriter::new(&mut out);
            w.write_json_string("").unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "\"\"");
    }

    #[test]
    fn indentation_uses_tabs() {
        let mut out = Vec::new();
        {
            let mut w = JsonWriter::new(&mut out);
            w.indent_in();
            w.indent_in();
            w.write_indent().unwrap();
        }
        assert_eq!(out, b"\t\t");
    }
}
