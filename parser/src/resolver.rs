//! Dictionary resolver: given a parent entry (or none for the root), a
//! target sequence number, and a format filter, return the matching
//! child entry.
//!
//! Children of one parent are contiguous by construction (the dictionary
//! builder lays the table out that way), so a linear scan over the
//! relevant slice is the right algorithm here — there is no need, and no
//! benefit, to building an index.

use bej_core::dictionary::{Dictionary, DictionaryEntry};

/// Matches any format; used for the root search space and for ENUM option
/// resolution, where the format filter does not apply.
pub const ANY_FORMAT: i16 = -1;

/// Resolve `sequence`/`format` against `dict`, searching the children of
/// `parent` (or the whole table when `parent` is `None`).
///
/// Returns the first match in table order; ties are broken by table
/// order, never by any notion of "best" match.
pub fn resolve<'d>(
    dict: &'d Dictionary,
    parent: Option<&DictionaryEntry>,
    sequence: u32,
    format: i16,
) -> Option<&'d DictionaryEntry> {
    dict.children_of(parent).iter().find(|entry| {
        entry.sequence_number as u32 == sequence
            && (format == ANY_FORMAT || entry.principal_format() as i16 == format)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bej_core::dictionary::{Dictionary, DictionaryEntry};

    fn entry(format: u8, seq: u16) -> DictionaryEntry {
        DictionaryEntry {
            format,
            sequence_number: seq,
            child_pointer_offset: 0,
            child_count: 0,
            name_length: 0,
            name_offset: 0,
            name: Some(format!("entry{seq}")),
        }
    }

    fn dict_with(entries: Vec<DictionaryEntry>) -> Dictionary {
        Dictionary {
            version_tag: 1,
            dictionary_flags: 0,
            entry_count: entries.len() as u16,
            schema_version: 1,
            dictionary_size: 0,
            entries,
        }
    }

    #[test]
    fn root_search_scans_whole_table() {
        let dict = dict_with(vec![entry(0x30, 0), entry(0x30, 1)]);
        let found = resolve(&dict, None, 1, ANY_FORMAT).unwrap();
        assert_eq!(found.sequence_number, 1);
    }

    #[test]
    fn format_filter_excludes_mismatched_entries() {
        let dict = dict_with(vec![entry(0x30, 5), entry(0x50, 5)]);
        // two entries share sequence 5 but differ in format
        let found = resolve(&dict, None, 5, 0x05).unwrap();
        assert_eq!(found.format, 0x50);
    }

    #[test]
    fn no_match_returns_none() {
        let dict = dict_with(vec![entry(0x30, 5)]);
        assert!(resolve(&dict, None, 99, ANY_FORMAT).is_none());
    }

    #[test]
    fn first_match_in_table_order_wins_on_tie() {
        let dict = dict_with(vec![entry(0x30, 5), entry(0x30, 5)]);
        let found = resolve(&dict, None, 5, ANY_FORMAT).unwrap();
        assert!(std::ptr::eq(found, &dict.entries[0]));
    }
}
