//! Cross-module integration test: builds a small in-memory schema
//! dictionary and a hand-assembled BEJ document, then asserts on the
//! rendered JSON text produced by [`bej_parser::decode_bej`].

use bej_core::dictionary::{Dictionary, DictionaryEntry};

fn empty_dictionary() -> Dictionary {
    Dictionary {
        version_tag: 1,
        dictionary_flags: 0,
        entry_count: 0,
        schema_version: 1,
        dictionary_size: 0,
        entries: vec![],
    }
}

fn entry(
    format: u8,
    sequence_number: u16,
    child_pointer_offset: u16,
    child_count: u16,
    name: Option<&str>,
) -> DictionaryEntry {
    DictionaryEntry {
        format,
        sequence_number,
        child_pointer_offset,
        child_count,
        name_length: name.map(|n| n.len() as u8).unwrap_or(0),
        name_offset: 0,
        name: name.map(str::to_owned),
    }
}

/// A schema dictionary describing a SET with two children: a STRING
/// property `Name` (sequence 1) and an ENUM property `Color` (sequence 2)
/// whose three options are `Red`/`Green`/`Blue`. `child_pointer_offset`
/// values follow the real `(index * 10 + 12)` arithmetic so
/// `Dictionary::children_of` resolves exactly as a loaded dictionary would.
fn schema_dictionary() -> Dictionary {
    let entries = vec![
        entry(0x50, 1, 0, 0, Some("Name")),
        entry(0x40, 2, 12 + 2 * 10, 3, Some("Color")),
        entry(0x00, 0, 0, 0, Some("Red")),
        entry(0x00, 1, 0, 0, Some("Green")),
        entry(0x00, 2, 0, 0, Some("Blue")),
    ];
    Dictionary {
        version_tag: 1,
        dictionary_flags: 0,
        entry_count: entries.len() as u16,
        schema_version: 1,
        dictionary_size: 0,
        entries,
    }
}

/// NNINT-encode `v` using the smallest length in `[1, 4]`.
fn nnint(v: u32) -> Vec<u8> {
    let bytes = v.to_le_bytes();
    let len = match v {
        0..=0xFF => 1,
        0x100..=0xFFFF => 2,
        0x1_0000..=0xFF_FFFF => 3,
        _ => 4,
    };
    let mut out = vec![len as u8];
    out.extend_from_slice(&bytes[..len]);
    out
}

/// Assemble one SFLV's raw bytes: `sequence` (already the plain sequence
/// number, dict_selector forced to schema/bit `0`), `format` (principal
/// nibble, sub-flags always `0`), and `value`.
fn sflv_bytes(sequence: u32, format: u8, value: &[u8]) -> Vec<u8> {
    let mut out = nnint(sequence << 1);
    out.push(format << 4);
    out.extend(nnint(value.len() as u32));
    out.extend_from_slice(value);
    out
}

#[test]
fn decodes_a_set_with_a_string_and_a_resolved_enum() {
    let schema = schema_dictionary();
    let anno = empty_dictionary();

    let name_child = sflv_bytes(1, 0x05, b"Hi");
    let color_child = sflv_bytes(2, 0x04, &nnint(1)); // option sequence 1 -> "Green"

    let mut set_payload = nnint(2);
    set_payload.extend(&name_child);
    set_payload.extend(&color_child);

    let root = sflv_bytes(0, 0x00, &set_payload);

    let mut doc: Vec<u8> = vec![0x00, 0xF0, 0xF1, 0xF1, 0x00, 0x00, 0x00];
    doc.extend(root);

    let mut out = Vec::new();
    bej_parser::decode_bej(&mut &doc[..], &schema, &anno, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n\t\"Name\": \"Hi\",\n\t\"Color\": \"Green\"\n}\n"
    );
}

#[test]
fn unresolved_enum_option_falls_back_to_quoted_decimal() {
    let schema = schema_dictionary();
    let anno = empty_dictionary();

    let color_child = sflv_bytes(2, 0x04, &nnint(9)); // no option with sequence 9

    let mut set_payload = nnint(1);
    set_payload.extend(&color_child);

    let root = sflv_bytes(0, 0x00, &set_payload);

    let mut doc: Vec<u8> = vec![0x00, 0xF0, 0xF1, 0xF1, 0x00, 0x00, 0x00];
    doc.extend(root);

    let mut out = Vec::new();
    bej_parser::decode_bej(&mut &doc[..], &schema, &anno, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n\t\"Color\": \"9\"\n}\n"
    );
}

#[test]
fn unknown_sequence_falls_back_to_synthetic_key() {
    let schema = empty_dictionary();
    let anno = empty_dictionary();

    let child = sflv_bytes(7, 0x03, &42u32.to_le_bytes());

    let mut set_payload = nnint(1);
    set_payload.extend(&child);

    let root = sflv_bytes(0, 0x00, &set_payload);

    let mut doc: Vec<u8> = vec![0x00, 0xF0, 0xF1, 0xF1, 0x00, 0x00, 0x00];
    doc.extend(root);

    let mut out = Vec::new();
    bej_parser::decode_bej(&mut &doc[..], &schema, &anno, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n\t\"seq_7\": 42\n}\n"
    );
}
