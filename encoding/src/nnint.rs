//! NNINT (Non-Negative Integer) codec: a length-prefixed little-endian
//! variable-width unsigned integer in `[0, 2^32)` (DSP0218 §5.3.1).
//!
//! On the wire: one length byte `L ∈ [1,4]`, followed by `L` little-endian
//! value bytes, zero-extended to 32 bits.

use bej_core::error::{InvalidNnintSnafu, IoSnafu, Result};
use snafu::ResultExt;
use std::io::Read;

/// Read one NNINT from `source`.
///
/// Fails when the length byte is `0` or greater than `4`, or when `source`
/// yields fewer than `len + 1` bytes.
pub fn read_nnint<R: Read>(source: &mut R) -> Result<u32> {
    let mut len_byte = [0u8; 1];
    source.read_exact(&mut len_byte).context(IoSnafu)?;
    let len = len_byte[0];

    if !(1..=4).contains(&len) {
        return InvalidNnintSnafu { len }.fail();
    }

    let mut bytes = [0u8; 4];
    source
        .read_exact(&mut bytes[..len as usize])
        .context(IoSnafu)?;

    let mut value: u32 = 0;
    for (i, byte) in bytes[..len as usize].iter().enumerate() {
        value |= (*byte as u32) << (8 * i);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_through_four_byte_values() {
        assert_eq!(read_nnint(&mut &[1u8, 0x2A][..]).unwrap(), 0x2A);
        assert_eq!(read_nnint(&mut &[2u8, 0x12, 0x34][..]).unwrap(), 0x3412);
        assert_eq!(
            read_nnint(&mut &[4u8, 0x39, 0x30, 0x00, 0x00][..]).unwrap(),
            12345
        );
    }

    #[test]
    fn rejects_zero_length() {
        let err = read_nnint(&mut &[0u8, 0x01][..]).unwrap_err();
        assert!(matches!(err, bej_core::Error::InvalidNnint { len: 0, .. }));
    }

    #[test]
    fn rejects_length_over_four() {
        let err = read_nnint(&mut &[5u8, 0xAA][..]).unwrap_err();
        assert!(matches!(err, bej_core::Error::InvalidNnint { len: 5, .. }));
    }

    #[test]
    fn errors_on_short_read() {
        // length byte claims 4 bytes follow, only 1 is available
        assert!(read_nnint(&mut &[4u8, 0x01][..]).is_err());
    }

    #[test]
    fn round_trips_minimal_length_encoding() {
        // for every v representable in L bytes, encoding then parsing
        // reproduces v exactly
        for l in 1u8..=4 {
            let v: u32 = if l == 4 { 0xDEADBEEF } else { (1u32 << (8 * l - 1)) - 1 };
            let mut buf = vec![l];
            buf.extend_from_slice(&v.to_le_bytes()[..l as usize]);
            assert_eq!(read_nnint(&mut &buf[..]).unwrap(), v);
        }
    }
}
