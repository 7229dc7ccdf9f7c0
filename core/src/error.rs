//! This module aggregates errors that may emerge from the BEJ decoding
//! pipeline. It is shared by [`bej_encoding`] and [`bej_parser`] so that
//! both crates can propagate the same taxonomy without translation.

use snafu::{Backtrace, Snafu};
use std::collections::TryReserveError;

/// Type alias for a result from the BEJ decoding crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main data type for errors raised while reading a dictionary or a
/// BEJ document.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Propagated from the underlying reader (file or buffer slice).
    #[snafu(display("I/O error"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// A fixed-size header field could not be read in full.
    #[snafu(display("Malformed header: could not read field `{field}`"))]
    MalformedHeader {
        field: &'static str,
        backtrace: Backtrace,
    },

    /// NNINT length byte was `0` or greater than `4`.
    #[snafu(display("Invalid NNINT length byte {len}, must be in [1, 4]"))]
    InvalidNnint { len: u8, backtrace: Backtrace },

    /// A name, child-pointer, or payload offset escaped its containing
    /// buffer.
    #[snafu(display(
        "{what} at offset {offset} is out of bounds (buffer size {size})"
    ))]
    OutOfBounds {
        what: &'static str,
        offset: usize,
        size: usize,
        backtrace: Backtrace,
    },

    /// Could not reserve memory for a payload, dictionary entry, or name.
    #[snafu(display("Could not allocate {size} bytes for {what}"))]
    Allocation {
        size: usize,
        what: &'static str,
        source: TryReserveError,
    },

    /// Principal format code outside `[0x00, 0x0B]`.
    #[snafu(display("Unknown principal format code {code:#04x}"))]
    UnknownFormat { code: u8, backtrace: Backtrace },

    /// INTEGER payload longer than the 8 bytes a 64-bit accumulator holds.
    #[snafu(display("INTEGER value length {length} exceeds the 8-byte limit"))]
    IntegerTooLong { length: u32, backtrace: Backtrace },

    /// Recursion depth exceeded the decoder's configured limit.
    #[snafu(display("Decode recursion depth {depth} exceeded the configured limit"))]
    DepthExceeded { depth: u32, backtrace: Backtrace },
}
