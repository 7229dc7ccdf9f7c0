//! Recursive value decoder: dispatches on the 4-bit principal format and
//! emits JSON, recursing into SET and ARRAY via a nested
//! [`BufferReader`] over the SFLV value payload.

mod container;
mod scalar;

use crate::resolver::resolve;
use crate::writer::JsonWriter;
use bej_core::dictionary::{Dictionary, DictionaryEntry};
use bej_core::error::{DepthExceededSnafu, Result, UnknownFormatSnafu};
use bej_core::format::*;
use bej_core::sflv::{DictSelector, SflvRecord};
use snafu::ensure;
use std::io::Write;

/// Recursion depth equals BEJ document nesting depth. This bounds stack
/// growth on adversarial input without restructuring the
/// recursive-descent shape the wire grammar naturally maps to.
pub const MAX_DECODE_DEPTH: u32 = 256;

/// Borrows both dictionaries plus the output sink and its indentation
/// depth — one instance per decode invocation.
#[derive(Debug)]
pub struct DecoderContext<'d, W> {
    schema_dict: &'d Dictionary,
    anno_dict: &'d Dictionary,
    out: JsonWriter<W>,
}

impl<'d, W: Write> DecoderContext<'d, W> {
    /// Build a context borrowing `schema_dict` and `anno_dict` for the
    /// duration of the decode, writing to `out`.
    pub fn new(schema_dict: &'d Dictionary, anno_dict: &'d Dictionary, out: W) -> Self {
        DecoderContext {
            schema_dict,
            anno_dict,
            out: JsonWriter::new(out),
        }
    }

    fn dict_for(&self, selector: DictSelector) -> &'d Dictionary {
        match selector {
            DictSelector::Schema => self.schema_dict,
            DictSelector::Annotation => self.anno_dict,
        }
    }

    /// Flush the output sink. Called by the driver after the root value
    /// and trailing newline have been written.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()
    }

    /// Write the newline that terminates the document.
    pub fn write_trailing_newline(&mut self) -> Result<()> {
        self.out.write_raw("\n")
    }

    /// Decode one SFLV record, writing its JSON representation.
    ///
    /// `entry` is the dictionary entry describing `sflv`, or `None` for
    /// the document root (the root's search space is the whole schema
    /// dictionary).
    pub fn decode_value(
        &mut self,
        sflv: &SflvRecord,
        entry: Option<&'d DictionaryEntry>,
        depth: u32,
    ) -> Result<()> {
        ensure!(depth <= MAX_DECODE_DEPTH, DepthExceededSnafu { depth });

        match sflv.format {
            BEJ_FORMAT_SET => container::decode_set(self, sflv, entry, depth),
            BEJ_FORMAT_ARRAY => container::decode_array(self, sflv, entry, depth),
            BEJ_FORMAT_NULL => self.out.write_raw("null"),
            BEJ_FORMAT_INTEGER => scalar::decode_integer(self, sflv),
            BEJ_FORMAT_ENUM => scalar::decode_enum(self, sflv, entry),
            BEJ_FORMAT_STRING => scalar::decode_string(self, sflv),
            BEJ_FORMAT_REAL => scalar::decode_real(self, sflv),
            BEJ_FORMAT_BOOLEAN => scalar::decode_boolean(self, sflv),
            BEJ_FORMAT_BYTE_STRING => self.out.write_raw("\"<byte_string>\""),
            BEJ_FORMAT_CHOICE => scalar::decode_unimplemented(self, "CHOICE"),
            BEJ_FORMAT_PROPERTY_ANNOTATION => scalar::decode_unimplemented(self, "PROPERTY_ANNOTATION"),
            BEJ_FORMAT_REGISTRY_ITEM => scalar::decode_unimplemented(self, "REGISTRY_ITEM"),
            other => UnknownFormatSnafu { code: other }.fail(),
        }
    }

    /// Resolve `sequence`/`format` against the dictionary selected by
    /// `selector`, searching the children of `parent`.
    fn resolve_child(
        &self,
        selector: DictSelector,
        parent: Option<&DictionaryEntry>,
        sequence: u32,
        format: i16,
    ) -> Option<&'d DictionaryEntry> {
        resolve(self.dict_for(selector), parent, sequence, format)
    }
}
