use nbtx::ascii::{dump_ascii, Brace, ByteArrayRadix, Style};
use nbtx::kind::TagKind;
use nbtx::tag::Tag;

#[test]
fn default_style_prints_braces_on_the_header_line() {
    let mut root = Tag::new_compound(Some("root"));
    root.put_int(Some("x"), 1).unwrap();
    let text = dump_ascii(&root, &Style::default());
    assert!(text.starts_with("TAG_Compound(\"root\"): {\n"));
    assert!(text.contains("  TAG_Int(\"x\"): 1\n"));
}

#[test]
fn own_line_style_moves_the_brace_down() {
    let root = Tag::new_compound(Some("root"));
    let style = Style { brace: Brace::OwnLine, ..Style::default() };
    let text = dump_ascii(&root, &style);
    assert_eq!(text, "TAG_Compound(\"root\"):\n{\n}\n");
}

#[test]
fn unnamed_tag_prints_the_null_marker() {
    let root = Tag::new_compound(None::<Vec<u8>>);
    let text = dump_ascii(&root, &Style::default());
    assert!(text.starts_with("TAG_Compound(\"<null>\")"));
}

#[test]
fn list_children_omit_their_own_name() {
    let mut list = Tag::new_list(Some("xs"), TagKind::TAG_Int);
    list.put_int(None::<Vec<u8>>, 5).unwrap();
    let text = dump_ascii(&list, &Style::default());
    assert!(text.contains("  TAG_Int: 5\n"));
}

#[test]
fn byte_array_radix_switches_between_hex_and_decimal() {
    let tag = Tag::byte_array(Some("raw"), vec![16, 32]);
    let dec = dump_ascii(&tag, &Style::default());
    assert!(dec.contains("16, 32"));

    let hex_style = Style { byte_array_radix: ByteArrayRadix::Hex, ..Style::default() };
    let hex = dump_ascii(&tag, &hex_style);
    assert!(hex.contains("0x10, 0x20"));
}
