//! Top-level BEJ document decode: read the 7-byte prologue, the root
//! SFLV, and drive [`crate::decode::DecoderContext`] to produce the
//! final JSON text.

use crate::decode::DecoderContext;
use bej_core::dictionary::Dictionary;
use bej_core::error::{MalformedHeaderSnafu, Result};
use bej_encoding::read_sflv;
use snafu::ensure;
use std::io::{Read, Write};

/// BEJ version values this decoder accepts, little-endian as they appear
/// on the wire (DSP0218 §5.2).
const ACCEPTED_VERSIONS: [u32; 2] = [0xF1F0F000, 0xF1F1F000];

/// Decode a full BEJ document read from `source`, writing pretty-printed
/// JSON to `sink`.
///
/// `source` must be positioned at the start of the BEJ prologue.
/// `schema_dict` and `anno_dict` are consulted to resolve property and
/// enum names; the root SFLV's search space is the whole schema
/// dictionary (no parent entry).
pub fn decode_bej<R: Read, W: Write>(
    source: &mut R,
    schema_dict: &Dictionary,
    anno_dict: &Dictionary,
    sink: W,
) -> Result<()> {
    let version = read_prologue(source)?;
    ensure!(
        ACCEPTED_VERSIONS.contains(&version),
        MalformedHeaderSnafu {
            field: "BEJ version"
        }
    );

    let root = read_sflv(source)?;

    let mut ctx = DecoderContext::new(schema_dict, anno_dict, sink);
    ctx.decode_value(&root, None, 0)?;
    ctx.write_trailing_newline()?;
    ctx.flush()
}

/// Read the 7-byte prologue: 4-byte version, 2-byte flags, 1-byte schema
/// class. Only the version is validated; flags and schema class are
/// carried by callers that need them but play no role in decoding.
fn read_prologue<R: Read>(source: &mut R) -> Result<u32> {
    let mut header = [0u8; 7];
    if source.read_exact(&mut header).is_err() {
        return MalformedHeaderSnafu {
            field: "BEJ prologue",
        }
        .fail();
    }
    Ok(u32::from_le_bytes([header[0], header[1], header[2], header[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bej_core::dictionary::Dictionary;

    fn empty_dict() -> Dictionary {
        Dictionary {
            version_tag: 1,
            dictionary_flags: 0,
            entry_count: 0,
            schema_version: 1,
            dictionary_size: 0,
            entries: vec![],
        }
    }

    #[test]
    fn decodes_a_boolean_root_value() {
        let schema = empty_dict();
        let anno = empty_dict();
        // prologue: version 0xF1F0F000 LE, flags 0x0000, schema class 0x00
        let mut doc: Vec<u8> = vec![0x00, 0xF0, 0xF1, 0xF1, 0x00, 0x00, 0x00];
        // root SFLV: seq NNINT(0), format 0x70 (BOOLEAN, no sub-flags), len NNINT(1), value 0x01
        doc.extend_from_slice(&[1, 0x00, 0x70, 1, 0x01]);

        let mut out = Vec::new();
        decode_bej(&mut &doc[..], &schema, &anno, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "true\n");
    }

    #[test]
    fn rejects_unknown_version() {
        let schema = empty_dict();
        let anno = empty_dict();
        let mut doc: Vec<u8> = vec![0xAA, 0xBB, 0xCC, 0xDD, 0x00, 0x00, 0x00];
        doc.extend_from_slice(&[1, 0x00, 0x70, 1, 0x00]);

        let mut out = Vec::new();
        let err = decode_bej(&mut &doc[..], &schema, &anno, &mut out).unwrap_err();
        assert!(matches!(err, bej_core::Error::MalformedHeader { .. }));
    }
}
