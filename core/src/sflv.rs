//! The SFLV (Sequence, Format, Length, Value) record: the universal
//! container for every value in a BEJ document (DSP0218 §5.3.6-5.3.9).

/// Selects which of the two dictionaries a child SFLV's sequence number
/// should be resolved against. Carried by the low bit of the raw sequence
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictSelector {
    /// Bit `0`: the schema dictionary, carrying the data model.
    Schema,
    /// Bit `1`: the annotation dictionary, carrying JSON annotations such
    /// as `@odata.type`.
    Annotation,
}

impl DictSelector {
    /// Recover the selector from the low bit of a raw sequence field.
    pub const fn from_bit(bit: u32) -> Self {
        if bit & 1 == 1 {
            DictSelector::Annotation
        } else {
            DictSelector::Schema
        }
    }
}

/// A decoded SFLV tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SflvRecord {
    /// Dictionary sequence number, with the dictionary-selector bit
    /// already stripped.
    pub sequence: u32,
    /// Which dictionary `sequence` should be resolved against.
    pub dict_selector: DictSelector,
    /// Principal data type: the high nibble of the raw format byte.
    pub format: u8,
    /// Byte length of `value`.
    pub length: u32,
    /// Owned payload, exactly `length` bytes.
    pub value: Vec<u8>,
}

impl SflvRecord {
    /// `true` if the principal format is [`crate::format::BEJ_FORMAT_SET`]
    /// or [`crate::format::BEJ_FORMAT_ARRAY`], i.e. this record's value is
    /// itself a sequence of child SFLVs.
    pub fn is_container(&self) -> bool {
        matches!(
            self.format,
            crate::format::BEJ_FORMAT_SET | crate::format::BEJ_FORMAT_ARRAY
        )
    }
}
