//! Byte source abstractions used by the primitive codec.
//!
//! Two sources are used throughout the decoder: an open [`std::fs::File`]
//! positioned at the start of a BEJ document, and a [`BufferReader`]
//! carved out of an enclosing SFLV value's payload. Both implement
//! [`std::io::Read`], so [`crate::nnint::read_nnint`] and
//! [`crate::sflv::read_sflv`] are written once, generically, and reused
//! for either source.

use std::io::{self, Read};

/// A borrowed byte slice with a cursor, used to recurse into a SET or
/// ARRAY's payload without copying it out of the enclosing SFLV value.
#[derive(Debug, Clone)]
pub struct BufferReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BufferReader<'a> {
    /// Wrap `data` with the cursor at position `0`.
    pub fn new(data: &'a [u8]) -> Self {
        BufferReader { data, position: 0 }
    }

    /// Total size of the wrapped slice.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position, always `<= size()`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// `true` once every byte of the slice has been read.
    pub fn is_eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The unread remainder of the slice.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl<'a> Read for BufferReader<'a> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }
}
