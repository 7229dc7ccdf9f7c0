//! The BEJ dictionary data model (DSP0218 §7.2.3.2): a flat table of
//! entries with intra-table offsets forming a tree, addressed by absolute
//! byte offset into the dictionary file rather than by pointer.

/// Size in bytes of the fixed dictionary file header.
pub const DICTIONARY_HEADER_SIZE: usize = 12;
/// Size in bytes of one dictionary entry row.
pub const DICTIONARY_ENTRY_SIZE: usize = 10;

/// One row of a [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Packed type/flags; only the high nibble is significant for type
    /// matching (see [`crate::format::get_msb4`]).
    pub format: u8,
    /// Identity within the parent's child range.
    pub sequence_number: u16,
    /// Absolute byte offset into the dictionary file where this entry's
    /// first child row begins. `0` means "no children".
    pub child_pointer_offset: u16,
    /// Number of contiguous child rows starting at `child_pointer_offset`.
    pub child_count: u16,
    /// Length of the entry's name in the name string pool, `0` if absent.
    pub name_length: u8,
    /// Absolute byte offset of the entry's name in the name string pool.
    pub name_offset: u16,
    /// The resolved UTF-8 name, if this entry carries one.
    pub name: Option<String>,
}

impl DictionaryEntry {
    /// The principal data type this entry describes (high nibble of
    /// `format`).
    pub fn principal_format(&self) -> u8 {
        crate::format::get_msb4(self.format)
    }

    /// Byte index, within [`Dictionary::entries`], of this entry's first
    /// child row, or `None` if it has no children.
    pub fn child_start_index(&self) -> Option<usize> {
        if self.child_pointer_offset == 0 {
            None
        } else {
            Some((self.child_pointer_offset as usize - DICTIONARY_HEADER_SIZE) / DICTIONARY_ENTRY_SIZE)
        }
    }
}

/// An ordered sequence of [`DictionaryEntry`] plus its file header fields.
///
/// Immutable once loaded; the decoder only ever borrows a `Dictionary`, it
/// never takes ownership of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Dictionary format version tag.
    pub version_tag: u8,
    /// Reserved/implementation-defined dictionary flags.
    pub dictionary_flags: u8,
    /// Number of rows in `entries`.
    pub entry_count: u16,
    /// Schema version this dictionary was generated from.
    pub schema_version: u32,
    /// Total dictionary file size in bytes, as recorded in the header.
    pub dictionary_size: u32,
    /// The flat entry table, in file order.
    pub entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Entries with no parent, i.e. the root search space used when
    /// decoding the top-level SFLV.
    pub fn roots(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// The contiguous slice of child rows belonging to `parent`, or the
    /// full table when `parent` is `None` (root search space, no parent to
    /// scope children to).
    pub fn children_of<'d>(&'d self, parent: Option<&DictionaryEntry>) -> &'d [DictionaryEntry] {
        match parent {
            None => &self.entries,
            Some(parent) => match parent.child_start_index() {
                None => &[],
                Some(start) => {
                    let end = (start + parent.child_count as usize).min(self.entries.len());
                    let start = start.min(end);
                    &self.entries[start..end]
                }
            },
        }
    }
}
