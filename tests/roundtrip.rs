//! Parse/serialize round-trip coverage (Testable Properties 1-3, Concrete
//! Scenarios S1-S3, S7).

use nbtx::kind::TagKind;
use nbtx::tag::{Tag, TagPayload};
use nbtx::{parse, serialize};

#[test]
fn s1_minimal_root_is_byte_identical() {
    let bytes = [0x0A, 0x00, 0x00, 0x00];
    let tree = parse(&bytes).unwrap();
    assert_eq!(serialize(&tree).unwrap(), bytes);
}

#[test]
fn s3_nested_compound_with_list_roundtrips() {
    let mut inner = Tag::new_compound(Some("inner"));
    inner.put_byte(Some("flag"), 1).unwrap();

    let mut list = Tag::new_list(Some("numbers"), TagKind::TAG_Int);
    list.put_int(None::<Vec<u8>>, 1).unwrap();
    list.put_int(None::<Vec<u8>>, 2).unwrap();
    list.put_int(None::<Vec<u8>>, 3).unwrap();

    let mut root = Tag::new_compound(Some(""));
    root.children_mut().unwrap().push(inner);
    root.children_mut().unwrap().push(list);

    let bytes = serialize(&root).unwrap();
    let reparsed = parse(&bytes).unwrap();
    assert_eq!(root, reparsed);
}

#[test]
fn s7_extended_unsigned_kinds_roundtrip() {
    let mut root = Tag::new_compound(Some(""));
    root.put_ubyte(Some("ub"), 200).unwrap();
    root.put_ushort(Some("us"), 40_000).unwrap();
    root.put_uint(Some("ui"), 3_000_000_000).unwrap();
    root.put_ulong(Some("ul"), 10_000_000_000_000_000_000).unwrap();

    let bytes = serialize(&root).unwrap();
    let reparsed = parse(&bytes).unwrap();
    assert_eq!(root, reparsed);

    let ul = reparsed.children().unwrap().iter().find(|c| c.name() == Some(&b"ul"[..])).unwrap();
    assert!(matches!(ul.payload(), TagPayload::ULong(10_000_000_000_000_000_000)));
}

#[test]
fn byte_array_and_string_preserve_raw_bytes() {
    let mut root = Tag::new_compound(Some(""));
    root.put_byte_array(Some("data"), vec![0, 1, 2, 255]).unwrap();
    root.put_string(Some("label"), vec![0xFF, 0xFE]).unwrap();

    let bytes = serialize(&root).unwrap();
    let reparsed = parse(&bytes).unwrap();
    assert_eq!(root, reparsed);
}

#[test]
fn s6_truncated_input_is_rejected() {
    let bytes = [0x0A, 0x00, 0x00];
    assert!(parse(&bytes).is_err());
}

#[test]
fn unknown_tag_kind_byte_is_rejected() {
    let bytes = [0xFE, 0x00, 0x00];
    assert!(parse(&bytes).is_err());
}
