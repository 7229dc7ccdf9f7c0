//! SET and ARRAY decoding. Both formats share the same payload shape —
//! an NNINT element count followed by that many SFLVs — and differ only
//! in how the child's dictionary entry is found and how the JSON layout
//! is punctuated.

use super::DecoderContext;
use bej_core::dictionary::DictionaryEntry;
use bej_core::error::Result;
use bej_core::sflv::SflvRecord;
use bej_encoding::{read_nnint, read_sflv, BufferReader};
use std::io::Write;

/// Decode a SET: a JSON object whose members are resolved one at a time
/// against the dictionary, each on its own indented line.
pub fn decode_set<'d, W: Write>(
    ctx: &mut DecoderContext<'d, W>,
    sflv: &SflvRecord,
    entry: Option<&'d DictionaryEntry>,
    depth: u32,
) -> Result<()> {
    let mut reader = BufferReader::new(&sflv.value);
    let count = read_nnint(&mut reader)?;

    if count == 0 {
        return ctx_write_raw(ctx, "{}");
    }

    ctx_write_raw(ctx, "{")?;
    ctx.out_indent_in();
    for i in 0..count {
        let child = read_sflv(&mut reader)?;
        let resolved = ctx.resolve_child(child.dict_selector, entry, child.sequence, child.format as i16);

        ctx.out_newline_indent()?;
        match resolved.and_then(|e| e.name.as_deref()) {
            Some(name) => ctx.write_json_key(name)?,
            None => ctx.write_json_key(&format!("seq_{}", child.sequence))?,
        }
        ctx_write_raw(ctx, ": ")?;
        ctx.decode_value(&child, resolved, depth + 1)?;
        if i + 1 < count {
            ctx_write_raw(ctx, ",")?;
        }
    }
    ctx.out_indent_out();
    ctx.out_newline_indent()?;
    ctx_write_raw(ctx, "}")
}

/// Decode an ARRAY: a JSON array whose elements all share the array's own
/// dictionary entry (the resolver is not consulted per element), laid out
/// on a single line separated by `", "`.
pub fn decode_array<'d, W: Write>(
    ctx: &mut DecoderContext<'d, W>,
    sflv: &SflvRecord,
    entry: Option<&'d DictionaryEntry>,
    depth: u32,
) -> Result<()> {
    let mut reader = BufferReader::new(&sflv.value);
    let count = read_nnint(&mut reader)?;

    ctx_write_raw(ctx, "[")?;
    for i in 0..count {
        let child = read_sflv(&mut reader)?;
        if i > 0 {
            ctx_write_raw(ctx, ", ")?;
        }
        ctx.decode_value(&child, entry, depth + 1)?;
    }
    ctx_write_raw(ctx, "]")
}

fn ctx_write_raw<W: Write>(ctx: &mut DecoderContext<'_, W>, s: &str) -> Result<()> {
    ctx.out.write_raw(s)
}

impl<'d, W: Write> DecoderContext<'d, W> {
    fn out_indent_in(&mut self) {
        self.out.indent_in();
    }

    fn out_indent_out(&mut self) {
        self.out.indent_out();
    }

    fn out_newline_indent(&mut self) -> Result<()> {
        self.out.write_raw("\n")?;
        self.out.write_indent()
    }

    fn write_json_key(&mut self, name: &str) -> Result<()> {
        self.out.write_json_string(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bej_core::dictionary::Dictionary;

    fn empty_dicts() -> (Dictionary, Dictionary) {
        let d = Dictionary {
            version_tag: 1,
            dictionary_flags: 0,
            entry_count: 0,
            schema_version: 1,
            dictionary_size: 0,
            entries: vec![],
        };
        (d.clone(), d)
    }

    #[test]
    fn empty_set_renders_as_braces() {
        let (schema, anno) = empty_dicts();
        let mut out = Vec::new();
        {
            let mut ctx = DecoderContext::new(&schema, &anno, &mut out);
            let sflv = SflvRecord {
                sequence: 0,
                dict_selector: bej_core::sflv::DictSelector::Schema,
                format: bej_core::format::BEJ_FORMAT_SET,
                length: 2,
                value: vec![1, 0x00],
            };
            ctx.decode_value(&sflv, None, 0).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "{}");
    }

    #[test]
    fn empty_array_renders_as_brackets() {
        let (schema, anno) = empty_dicts();
        let mut out = Vec::new();
        {
            let mut ctx = DecoderContext::new(&schema, &anno, &mut out);
            let sflv = SflvRecord {
                sequence: 0,
                dict_selector: bej_core::sflv::DictSelector::Schema,
                format: bej_core::format::BEJ_FORMAT_ARRAY,
                length: 2,
                value: vec![1, 0x00],
            };
            ctx.decode_value(&sflv, None, 0).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "[]");
    }
}
