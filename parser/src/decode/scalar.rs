//! Scalar format decoding: INTEGER, ENUM, STRING, REAL, BOOLEAN, and the
//! diagnostic stand-in for formats this decoder does not implement.

use super::DecoderContext;
use crate::resolver::ANY_FORMAT;
use bej_core::dictionary::DictionaryEntry;
use bej_core::error::{IntegerTooLongSnafu, Result};
use bej_core::sflv::SflvRecord;
use bej_encoding::{read_nnint, BufferReader};
use snafu::ensure;
use std::io::Write;

/// Little-endian signed integer, 1-8 bytes, sign-extended to `i64`.
/// Length `0` decodes as `0`.
pub fn decode_integer<W: Write>(ctx: &mut DecoderContext<'_, W>, sflv: &SflvRecord) -> Result<()> {
    let bytes = &sflv.value;
    ensure!(
        bytes.len() <= 8,
        IntegerTooLongSnafu {
            length: bytes.len() as u32
        }
    );

    if bytes.is_empty() {
        return ctx.out.write_raw("0");
    }

    let mut acc: i64 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        acc |= (*byte as i64) << (8 * i);
    }
    let sign_bit = 8 * bytes.len() - 1;
    if bytes.len() < 8 && (acc >> sign_bit) & 1 == 1 {
        acc |= -1i64 << (8 * bytes.len());
    }
    ctx.out.write_raw(&acc.to_string())
}

/// NNINT option sequence resolved against the dictionary; falls back to
/// the raw decimal value when no matching entry carries a name.
pub fn decode_enum<'d, W: Write>(
    ctx: &mut DecoderContext<'d, W>,
    sflv: &SflvRecord,
    entry: Option<&'d DictionaryEntry>,
) -> Result<()> {
    let mut reader = BufferReader::new(&sflv.value);
    let option_sequence = read_nnint(&mut reader)?;

    let resolved = ctx.resolve_child(sflv.dict_selector, entry, option_sequence, ANY_FORMAT);
    match resolved.and_then(|e| e.name.as_deref()) {
        Some(name) => ctx.out.write_json_string(name),
        None => ctx.out.write_json_string(&option_sequence.to_string()),
    }
}

/// Raw UTF-8 payload, JSON-escaped. Lossy conversion matches the
/// dictionary name loader's handling of non-UTF-8 bytes.
pub fn decode_string<W: Write>(ctx: &mut DecoderContext<'_, W>, sflv: &SflvRecord) -> Result<()> {
    let text = String::from_utf8_lossy(&sflv.value);
    ctx.out.write_json_string(&text)
}

/// IEEE-754 float (4 or 8 bytes), printed to a fixed number of significant
/// digits rather than Rust's shortest-round-trip `Display`; 1- and 2-byte
/// payloads are emitted as a raw unsigned stopgap value, anything else as
/// `null`.
pub fn decode_real<W: Write>(ctx: &mut DecoderContext<'_, W>, sflv: &SflvRecord) -> Result<()> {
    let bytes = &sflv.value;
    match bytes.len() {
        4 => {
            let v = f32::from_le_bytes(bytes[..4].try_into().unwrap());
            ctx.out.write_raw(&format_significant(v as f64, 7))
        }
        8 => {
            let v = f64::from_le_bytes(bytes[..8].try_into().unwrap());
            ctx.out.write_raw(&format_significant(v, 15))
        }
        1 => ctx.out.write_raw(&bytes[0].to_string()),
        2 => {
            let v = u16::from_le_bytes(bytes[..2].try_into().unwrap());
            ctx.out.write_raw(&v.to_string())
        }
        _ => ctx.out.write_raw("null"),
    }
}

/// Round `v` to exactly `significant_digits` significant decimal digits
/// and render it in plain (non-exponential) notation, trimming a
/// trailing fractional `0`s/`.`. `f32::to_string()`/`f64::to_string()`
/// print the shortest string that round-trips, which is a different
/// (and usually longer) number of digits than the fixed precision this
/// format calls for.
fn format_significant(v: f64, significant_digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", significant_digits - 1, v);
    let (mantissa, exponent) = scientific.split_once('e').expect("LowerExp always emits 'e'");
    let exponent: i32 = exponent.parse().expect("LowerExp exponent is a plain integer");

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    // `digits` holds `significant_digits` decimal digits representing the
    // value `0.{digits} * 10^(exponent + 1)`; `point` is where the decimal
    // point falls relative to the start of `digits`.
    let point = exponent + 1;

    let mut plain = String::new();
    if point <= 0 {
        plain.push_str("0.");
        plain.extend(std::iter::repeat('0').take((-point) as usize));
        plain.push_str(&digits);
    } else if (point as usize) >= digits.len() {
        plain.push_str(&digits);
        plain.extend(std::iter::repeat('0').take(point as usize - digits.len()));
    } else {
        plain.push_str(&digits[..point as usize]);
        plain.push('.');
        plain.push_str(&digits[point as usize..]);
    }

    if plain.contains('.') {
        while plain.ends_with('0') {
            plain.pop();
        }
        if plain.ends_with('.') {
            plain.pop();
        }
    }

    if negative {
        format!("-{plain}")
    } else {
        plain
    }
}

/// Nonzero first byte is `true`; an empty payload is `false`.
pub fn decode_boolean<W: Write>(ctx: &mut DecoderContext<'_, W>, sflv: &SflvRecord) -> Result<()> {
    let value = sflv.value.first().map(|b| *b != 0).unwrap_or(false);
    ctx.out.write_raw(if value { "true" } else { "false" })
}

/// CHOICE, PROPERTY_ANNOTATION, and REGISTRY_ITEM are not implemented by
/// this decoder; emit `null` and log which format was skipped.
pub fn decode_unimplemented<W: Write>(ctx: &mut DecoderContext<'_, W>, format_name: &str) -> Result<()> {
    tracing::warn!(format = format_name, "unimplemented BEJ format, emitting null");
    ctx.out.write_raw("null")
}
