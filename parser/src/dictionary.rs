//! Dictionary loader (DSP0218 §7.2.3.2).
//!
//! A dictionary file is a fixed 12-byte header, an entry table of
//! `entry_count` fixed 10-byte rows, and a trailing name string pool. This
//! module reads the whole file into memory once and parses it into a
//! [`Dictionary`].

use bej_core::dictionary::{Dictionary, DictionaryEntry, DICTIONARY_ENTRY_SIZE, DICTIONARY_HEADER_SIZE};
use bej_core::error::{MalformedHeaderSnafu, OutOfBoundsSnafu, Result};
use snafu::{ensure, ResultExt};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// `name_length` values at or above this are never resolved to a name;
/// they are treated the same as `name_length == 0`.
const NAME_LENGTH_SENTINEL: u8 = 255;

/// Load a dictionary from `path`: read the whole file, then parse its
/// header and entry table.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary> {
    let mut file = File::open(path.as_ref()).context(bej_core::error::IoSnafu)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .context(bej_core::error::IoSnafu)?;
    parse_dictionary(&data)
}

/// Parse an already-loaded dictionary file image.
pub fn parse_dictionary(data: &[u8]) -> Result<Dictionary> {
    ensure!(
        data.len() >= DICTIONARY_HEADER_SIZE,
        MalformedHeaderSnafu { field: "dictionary header" }
    );

    let version_tag = data[0];
    let dictionary_flags = data[1];
    let entry_count = u16::from_le_bytes([data[2], data[3]]);
    let schema_version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let dictionary_size = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);

    let mut entries = Vec::with_capacity(entry_count as usize);
    for i in 0..entry_count as usize {
        entries.push(parse_entry(data, i)?);
    }

    Ok(Dictionary {
        version_tag,
        dictionary_flags,
        entry_count,
        schema_version,
        dictionary_size,
        entries,
    })
}

fn parse_entry(data: &[u8], index: usize) -> Result<DictionaryEntry> {
    let base = DICTIONARY_HEADER_SIZE + index * DICTIONARY_ENTRY_SIZE;
    ensure!(
        base + DICTIONARY_ENTRY_SIZE <= data.len(),
        MalformedHeaderSnafu { field: "dictionary entry row" }
    );

    let format = data[base];
    let sequence_number = u16::from_le_bytes([data[base + 1], data[base + 2]]);
    let child_pointer_offset = u16::from_le_bytes([data[base + 3], data[base + 4]]);
    let child_count = u16::from_le_bytes([data[base + 5], data[base + 6]]);
    let name_length = data[base + 7];
    let name_offset = u16::from_le_bytes([data[base + 8], data[base + 9]]);

    let name = resolve_name(data, name_length, name_offset)?;

    Ok(DictionaryEntry {
        format,
        sequence_number,
        child_pointer_offset,
        child_count,
        name_length,
        name_offset,
        name,
    })
}

/// `name_length == 0` or `>= 255` means "no name", not an error. A name
/// length in range whose byte span escapes the file is an out-of-bounds
/// reference and aborts the load.
fn resolve_name(data: &[u8], name_length: u8, name_offset: u16) -> Result<Option<String>> {
    if name_length == 0 || name_length >= NAME_LENGTH_SENTINEL {
        return Ok(None);
    }

    let start = name_offset as usize;
    let end = start + name_length as usize;
    ensure!(
        end <= data.len(),
        OutOfBoundsSnafu {
            what: "dictionary entry name",
            offset: start,
            size: data.len(),
        }
    );

    Ok(Some(String::from_utf8_lossy(&data[start..end]).into_owned()))
}

/// Log every entry of `dict` at debug level, grounded on the original
/// implementation's declared (but unused in the kept excerpt)
/// `print_dictionary` diagnostic — rendered here through `tracing` rather
/// than a direct print, consistent with this repository's logging policy.
pub fn trace_dictionary(label: &str, dict: &Dictionary) {
    tracing::debug!(
        label,
        version_tag = dict.version_tag,
        entry_count = dict.entry_count,
        schema_version = dict.schema_version,
        "loaded dictionary"
    );
    for entry in &dict.entries {
        tracing::debug!(
            label,
            sequence_number = entry.sequence_number,
            format = entry.format,
            name = entry.name.as_deref().unwrap_or("<unnamed>"),
            "dictionary entry"
        );
    }
}
