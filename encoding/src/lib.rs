#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! Primitive NNINT/SFLV decoding and the byte reader abstractions they run
//! over. This crate provides no dictionary awareness and no recursion —
//! see `bej-parser` for the dictionary-guided recursive decoder built on
//! top of it.

pub mod nnint;
pub mod reader;
pub mod sflv;

pub use nnint::read_nnint;
pub use reader::BufferReader;
pub use sflv::read_sflv;
