#![crate_type = "lib"]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! Core data types and errors shared by the BEJ (DSP0218) decoding crates:
//! the dictionary data model, the SFLV record, and the principal format
//! constants. This crate contains no I/O and no decoding logic of its own.

pub mod dictionary;
pub mod error;
pub mod format;
pub mod sflv;

pub use dictionary::{Dictionary, DictionaryEntry};
pub use error::{Error, Result};
pub use sflv::{DictSelector, SflvRecord};
