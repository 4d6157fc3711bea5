use crate::error::{parse_err, NbtResult};
use crate::kind::TagKind;
use crate::tag::{Tag, TagPayload};
use crate::writer::Writer;

/// Serializes a tree to its binary representation. The inverse of
/// [`crate::parser::parse`]: for any tree produced by the parser,
/// `parse(serialize(t)?) == t` (modulo the free choice of element kind for
/// an empty list).
pub fn serialize(tree: &Tag) -> NbtResult<Vec<u8>> {
    let mut writer = Writer::new();
    write_tag(&mut writer, tree, true).map_err(|e| {
        log::debug!("serialize failed: {}", e);
        e
    })?;
    Ok(writer.into_vec())
}

fn write_name(writer: &mut Writer, name: &[u8]) -> NbtResult<()> {
    if name.len() > i16::MAX as usize {
        return parse_err(format!("name of {} bytes exceeds i16 range", name.len()));
    }
    writer.write_i16(name.len() as i16);
    writer.append(name);
    Ok(())
}

/// Writes a single tag. `write_kind` is false only for List payload
/// children: their kind is implied by the list header, and unnamed tags
/// (list children) never carry a name regardless of this flag.
fn write_tag(writer: &mut Writer, tag: &Tag, write_kind: bool) -> NbtResult<()> {
    if write_kind {
        writer.write_u8(tag.kind().as_wire());
    }

    if let Some(name) = &tag.name {
        write_name(writer, name)?;
    }

    write_payload(writer, &tag.payload)
}

fn homogeneous_kind(declared: TagKind, items: &[Tag]) -> NbtResult<TagKind> {
    if items.is_empty() {
        return Ok(declared);
    }
    let first = items[0].kind();
    for item in items {
        if item.kind() != first {
            return parse_err(format!(
                "heterogeneous list: expected every child to be {}, found {}",
                first,
                item.kind()
            ));
        }
    }
    Ok(first)
}

fn write_payload(writer: &mut Writer, payload: &TagPayload) -> NbtResult<()> {
    match payload {
        TagPayload::Byte(v) => writer.write_i8(*v),
        TagPayload::UByte(v) => writer.write_u8(*v),
        TagPayload::Short(v) => writer.write_i16(*v),
        TagPayload::UShort(v) => writer.write_u16(*v),
        TagPayload::Int(v) => writer.write_i32(*v),
        TagPayload::UInt(v) => writer.write_u32(*v),
        TagPayload::Long(v) => writer.write_i64(*v),
        TagPayload::ULong(v) => writer.write_u64(*v),
        TagPayload::Float(v) => writer.write_f32(*v),
        TagPayload::Double(v) => writer.write_f64(*v),
        TagPayload::ByteArray(bytes) => {
            if bytes.len() > i32::MAX as usize {
                return parse_err(format!("byte array of {} bytes exceeds i32 range", bytes.len()));
            }
            writer.write_i32(bytes.len() as i32);
            writer.append(bytes);
        }
        TagPayload::String(bytes) => {
            if bytes.len() > i16::MAX as usize {
                return parse_err(format!("string of {} bytes exceeds i16 range", bytes.len()));
            }
            writer.write_i16(bytes.len() as i16);
            writer.append(bytes);
        }
        TagPayload::List { element_kind, items } => {
            let kind = homogeneous_kind(*element_kind, items)?;
            if items.len() > i32::MAX as usize {
                return parse_err(format!("list of {} elements exceeds i32 range", items.len()));
            }
            writer.write_u8(kind.as_wire());
            writer.write_i32(items.len() as i32);
            for item in items {
                write_tag(writer, item, false)?;
            }
        }
        TagPayload::Compound(children) => {
            for child in children {
                write_tag(writer, child, true)?;
            }
            writer.write_u8(TagKind::TAG_End.as_wire());
        }
    }
    Ok(())
}
