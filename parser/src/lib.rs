#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! Dictionary-guided recursive BEJ decoding: loads schema and annotation
//! dictionaries, resolves property and enum names against them, and
//! drives the recursive descent over a BEJ document to produce
//! pretty-printed JSON.
//!
//! Built on the primitive codec in `bej-encoding`; this crate adds the
//! dictionary data model's consumers and nothing about the wire format
//! itself.

pub mod decode;
pub mod dictionary;
pub mod driver;
pub mod resolver;
pub mod writer;

pub use dictionary::load_dictionary;
pub use driver::decode_bej;
