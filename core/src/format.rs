//! BEJ principal data type constants (DSP0218 §5.3.7).
//!
//! These occupy the high nibble of an SFLV record's format byte; the low
//! nibble carries sub-flags (deferred, read-only, nullable) that this
//! decoder parses but does not act on.

/// JSON object. Payload: NNINT element count, then that many child SFLVs.
pub const BEJ_FORMAT_SET: u8 = 0x00;
/// JSON array. Same payload shape as [`BEJ_FORMAT_SET`], single element schema.
pub const BEJ_FORMAT_ARRAY: u8 = 0x01;
/// JSON `null`.
pub const BEJ_FORMAT_NULL: u8 = 0x02;
/// Little-endian signed integer, 1-8 bytes.
pub const BEJ_FORMAT_INTEGER: u8 = 0x03;
/// Enumeration: NNINT option index resolved against the dictionary.
pub const BEJ_FORMAT_ENUM: u8 = 0x04;
/// Raw UTF-8 string payload.
pub const BEJ_FORMAT_STRING: u8 = 0x05;
/// IEEE-754 float (4 or 8 bytes) or raw unsigned stopgap (1 or 2 bytes).
pub const BEJ_FORMAT_REAL: u8 = 0x06;
/// Single byte, nonzero is `true`.
pub const BEJ_FORMAT_BOOLEAN: u8 = 0x07;
/// Opaque byte string, emitted as a placeholder token.
pub const BEJ_FORMAT_BYTE_STRING: u8 = 0x08;
/// Unimplemented: emitted as `null` with a diagnostic.
pub const BEJ_FORMAT_CHOICE: u8 = 0x09;
/// Unimplemented: emitted as `null` with a diagnostic.
pub const BEJ_FORMAT_PROPERTY_ANNOTATION: u8 = 0x0A;
/// Unimplemented: emitted as `null` with a diagnostic.
pub const BEJ_FORMAT_REGISTRY_ITEM: u8 = 0x0B;

/// Extract the 4 most significant bits of a byte.
///
/// `get_msb4(0xF0) == 0x0F`, `get_msb4(0xA5) == 0x0A`, `get_msb4(0x00) == 0x00`,
/// `get_msb4(0x7F) == 0x07`.
pub const fn get_msb4(value: u8) -> u8 {
    (value >> 4) & 0x0F
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb4_matches_spec_examples() {
        assert_eq!(get_msb4(0xF0), 0x0F);
        assert_eq!(get_msb4(0xA5), 0x0A);
        assert_eq!(get_msb4(0x00), 0x00);
        assert_eq!(get_msb4(0x7F), 0x07);
    }

    #[test]
    fn msb4_exhaustive() {
        for x in 0u16..256 {
            let x = x as u8;
            assert_eq!(get_msb4(x), (x >> 4) & 0x0F);
        }
    }
}
