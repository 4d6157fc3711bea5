use crate::tag::{Tag, TagPayload};
use std::fmt::Write as _;

/// Where the opening brace of a container goes relative to its header line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Brace {
    /// `TAG_Compound("root"): {`
    SameLine,
    /// `TAG_Compound("root"):` followed by `{` on its own line.
    OwnLine,
}

/// The radix `TAG_ByteArray` contents are printed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ByteArrayRadix {
    Hex,
    Dec,
}

/// Controls the layout of [`dump_ascii`]. Mirrors the reference's
/// `nbtx_style` struct and its `NBTX_DEFAULT_STYLE` constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub brace: Brace,
    pub byte_array_radix: ByteArrayRadix,
    pub indent: usize,
}

impl Default for Style {
    fn default() -> Style {
        Style { brace: Brace::SameLine, byte_array_radix: ByteArrayRadix::Dec, indent: 2 }
    }
}

/// Renders a tree as a human-readable ASCII tree, in the style of the
/// reference's `nbtx_dump_ascii`.
pub fn dump_ascii(tree: &Tag, style: &Style) -> String {
    let mut out = String::new();
    write_tag(&mut out, tree, style, 0, true);
    out
}

fn indent(out: &mut String, style: &Style, depth: usize) {
    for _ in 0..(depth * style.indent) {
        out.push(' ');
    }
}

fn safe_name(name: Option<&[u8]>) -> String {
    match name {
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        None => "<null>".to_string(),
    }
}

fn write_header(out: &mut String, tag: &Tag, with_name: bool) {
    write!(out, "{}", tag.kind()).unwrap();
    if with_name {
        write!(out, "(\"{}\")", safe_name(tag.name())).unwrap();
    }
    out.push(':');
}

fn write_tag(out: &mut String, tag: &Tag, style: &Style, depth: usize, with_name: bool) {
    indent(out, style, depth);
    match tag.payload() {
        TagPayload::Byte(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::UByte(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::Short(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::UShort(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::Int(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::UInt(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::Long(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::ULong(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::Float(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::Double(v) => {
            write_header(out, tag, with_name);
            write!(out, " {}\n", v).unwrap();
        }
        TagPayload::String(bytes) => {
            write_header(out, tag, with_name);
            write!(out, " \"{}\"\n", String::from_utf8_lossy(bytes)).unwrap();
        }
        TagPayload::ByteArray(bytes) => {
            write_header(out, tag, with_name);
            out.push_str(" [");
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                match style.byte_array_radix {
                    ByteArrayRadix::Hex => write!(out, "0x{:02X}", b).unwrap(),
                    ByteArrayRadix::Dec => write!(out, "{}", b).unwrap(),
                }
            }
            out.push_str("]\n");
        }
        TagPayload::List { items, .. } => {
            write_header(out, tag, with_name);
            write_open_brace(out, style, depth);
            for item in items {
                write_tag(out, item, style, depth + 1, false);
            }
            indent(out, style, depth);
            out.push_str("}\n");
        }
        TagPayload::Compound(children) => {
            write_header(out, tag, with_name);
            write_open_brace(out, style, depth);
            for child in children {
                write_tag(out, child, style, depth + 1, true);
            }
            indent(out, style, depth);
            out.push_str("}\n");
        }
    }
}

fn write_open_brace(out: &mut String, style: &Style, depth: usize) {
    match style.brace {
        Brace::SameLine => out.push_str(" {\n"),
        Brace::OwnLine => {
            out.push('\n');
            indent(out, style, depth);
            out.push_str("{\n");
        }
    }
}
