//! SFLV (Sequence, Format, Length, Value) reading (DSP0218 §5.3.6-5.3.9).

use crate::nnint::read_nnint;
use bej_core::error::{AllocationSnafu, IoSnafu, Result};
use bej_core::sflv::{DictSelector, SflvRecord};
use snafu::ResultExt;
use std::io::Read;

/// Read one SFLV tuple from `source`: NNINT sequence, one format byte,
/// NNINT length, then exactly `length` raw value bytes.
pub fn read_sflv<R: Read>(source: &mut R) -> Result<SflvRecord> {
    let raw_sequence = read_nnint(source)?;

    let mut format_byte = [0u8; 1];
    source.read_exact(&mut format_byte).context(IoSnafu)?;

    let length = read_nnint(source)?;

    let mut value = Vec::new();
    value
        .try_reserve_exact(length as usize)
        .context(AllocationSnafu {
            size: length as usize,
            what: "SFLV value payload",
        })?;
    value.resize(length as usize, 0);
    source.read_exact(&mut value).context(IoSnafu)?;

    Ok(SflvRecord {
        sequence: raw_sequence >> 1,
        dict_selector: DictSelector::from_bit(raw_sequence),
        format: bej_core::format::get_msb4(format_byte[0]),
        length,
        value,
    })
}
