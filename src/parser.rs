use crate::error::{parse_err, NbtResult};
use crate::kind::TagKind;
use crate::reader::Reader;
use crate::tag::{Tag, TagPayload};

/// Parses a full NBTx document from an uncompressed, contiguous buffer.
///
/// The root is read as a named tag: a kind byte, then (unless the kind is
/// `TAG_End`) a name, then a kind-dispatched payload. The canonical root is
/// a Compound, but any kind is accepted, matching the reference.
pub fn parse(buf: &[u8]) -> NbtResult<Tag> {
    let mut reader = Reader::new(buf);
    read_named_tag(&mut reader).map_err(|e| {
        log::debug!("parse failed after {} byte(s) consumed: {}", buf.len() - reader.remaining(), e);
        e
    })
}

fn read_kind(reader: &mut Reader) -> NbtResult<TagKind> {
    let byte = reader.read_u8()?;
    TagKind::parse(byte).ok_or_else(|| {
        crate::error::NbtError::Parse(format!("unknown tag kind byte 0x{:02X}", byte))
    })
}

fn read_name(reader: &mut Reader) -> NbtResult<Vec<u8>> {
    let len = reader.read_i16()?;
    if len < 0 {
        return parse_err(format!("negative name length {}", len));
    }
    reader.read_bytes(len as usize)
}

fn read_named_tag(reader: &mut Reader) -> NbtResult<Tag> {
    let kind = read_kind(reader)?;
    if kind == TagKind::TAG_End {
        return parse_err("unexpected TAG_End as a named tag");
    }
    let name = read_name(reader)?;
    let payload = read_payload(reader, kind)?;
    Ok(Tag { name: Some(name), payload })
}

fn read_unnamed_tag(reader: &mut Reader, kind: TagKind) -> NbtResult<Tag> {
    let payload = read_payload(reader, kind)?;
    Ok(Tag { name: None, payload })
}

fn read_payload(reader: &mut Reader, kind: TagKind) -> NbtResult<TagPayload> {
    match kind {
        TagKind::TAG_End => parse_err("unexpected TAG_End inside a payload"),
        TagKind::TAG_Byte => Ok(TagPayload::Byte(reader.read_i8()?)),
        TagKind::TAG_UByte => Ok(TagPayload::UByte(reader.read_u8()?)),
        TagKind::TAG_Short => Ok(TagPayload::Short(reader.read_i16()?)),
        TagKind::TAG_UShort => Ok(TagPayload::UShort(reader.read_u16()?)),
        TagKind::TAG_Int => Ok(TagPayload::Int(reader.read_i32()?)),
        TagKind::TAG_UInt => Ok(TagPayload::UInt(reader.read_u32()?)),
        TagKind::TAG_Long => Ok(TagPayload::Long(reader.read_i64()?)),
        TagKind::TAG_ULong => Ok(TagPayload::ULong(reader.read_u64()?)),
        TagKind::TAG_Float => Ok(TagPayload::Float(reader.read_f32()?)),
        TagKind::TAG_Double => Ok(TagPayload::Double(reader.read_f64()?)),
        TagKind::TAG_ByteArray => {
            let len = reader.read_i32()?;
            if len < 0 {
                return parse_err(format!("negative byte array length {}", len));
            }
            Ok(TagPayload::ByteArray(reader.read_bytes(len as usize)?))
        }
        TagKind::TAG_String => {
            let len = reader.read_i16()?;
            if len < 0 {
                return parse_err(format!("negative string length {}", len));
            }
            Ok(TagPayload::String(reader.read_bytes(len as usize)?))
        }
        TagKind::TAG_List => read_list_payload(reader),
        TagKind::TAG_Compound => Ok(TagPayload::Compound(read_compound_children(reader)?)),
        TagKind::TAG_Invalid => parse_err("internal TAG_Invalid sentinel reached the payload dispatcher"),
    }
}

fn read_list_payload(reader: &mut Reader) -> NbtResult<TagPayload> {
    let raw_elt_kind = reader.read_u8()?;
    // Legacy tolerance ported from the reference's `read_list`: a list
    // header naming TAG_End as its element kind is treated as a Compound
    // element kind instead of a parse error.
    let element_kind = match TagKind::parse(raw_elt_kind) {
        Some(TagKind::TAG_End) => TagKind::TAG_Compound,
        Some(k) => k,
        None => {
            return parse_err(format!(
                "unknown list element kind byte 0x{:02X}",
                raw_elt_kind
            ))
        }
    };

    let count = reader.read_i32()?;
    if count < 0 {
        return parse_err(format!("negative list element count {}", count));
    }

    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        items.push(read_unnamed_tag(reader, element_kind)?);
    }

    Ok(TagPayload::List { element_kind, items })
}

fn read_compound_children(reader: &mut Reader) -> NbtResult<Vec<Tag>> {
    let mut children = Vec::new();
    loop {
        let kind = read_kind(reader)?;
        if kind == TagKind::TAG_End {
            break;
        }
        let name = read_name(reader)?;
        let payload = read_payload(reader, kind)?;
        children.push(Tag { name: Some(name), payload });
    }
    Ok(children)
}
