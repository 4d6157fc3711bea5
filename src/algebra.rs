use crate::error::{parse_err, NbtResult};
use crate::kind::TagKind;
use crate::tag::{Tag, TagPayload};
use std::ops::ControlFlow;

/// Absolute tolerance used when comparing `Float`/`Double` payloads for
/// structural equality. Matches the reference's `floats_are_close`; kept as
/// an absolute (not relative) epsilon, so very large magnitudes that differ
/// by more than this in absolute terms compare unequal even if they're
/// relatively close.
pub const FLOAT_EPSILON: f64 = 0.000_001;

fn floats_are_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_EPSILON
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && payload_eq(&self.payload, &other.payload)
    }
}

fn payload_eq(a: &TagPayload, b: &TagPayload) -> bool {
    match (a, b) {
        (TagPayload::Byte(x), TagPayload::Byte(y)) => x == y,
        (TagPayload::UByte(x), TagPayload::UByte(y)) => x == y,
        (TagPayload::Short(x), TagPayload::Short(y)) => x == y,
        (TagPayload::UShort(x), TagPayload::UShort(y)) => x == y,
        (TagPayload::Int(x), TagPayload::Int(y)) => x == y,
        (TagPayload::UInt(x), TagPayload::UInt(y)) => x == y,
        (TagPayload::Long(x), TagPayload::Long(y)) => x == y,
        (TagPayload::ULong(x), TagPayload::ULong(y)) => x == y,
        (TagPayload::Float(x), TagPayload::Float(y)) => floats_are_close(*x as f64, *y as f64),
        (TagPayload::Double(x), TagPayload::Double(y)) => floats_are_close(*x, *y),
        (TagPayload::ByteArray(x), TagPayload::ByteArray(y)) => x == y,
        (TagPayload::String(x), TagPayload::String(y)) => x == y,
        (
            TagPayload::List { element_kind: ek1, items: i1 },
            TagPayload::List { element_kind: ek2, items: i2 },
        ) => ek1 == ek2 && i1.len() == i2.len() && i1.iter().zip(i2).all(|(a, b)| a == b),
        (TagPayload::Compound(x), TagPayload::Compound(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| a == b)
        }
        _ => false,
    }
}

/// Visits `tag` and every descendant in pre-order (self, then each child in
/// order), calling `visit` on each. Returns `ControlFlow::Break` as soon as
/// `visit` does, short-circuiting the remaining traversal.
pub fn map<F: FnMut(&Tag) -> ControlFlow<()>>(tag: &Tag, visit: &mut F) -> ControlFlow<()> {
    visit(tag)?;
    if let Some(children) = tag.children() {
        for child in children {
            map(child, visit)?;
        }
    }
    ControlFlow::Continue(())
}

/// The total number of nodes in the tree rooted at `tag`, including `tag`
/// itself.
pub fn size(tag: &Tag) -> usize {
    let mut count = 0usize;
    let _ = map(tag, &mut |_| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

/// Returns the first node (pre-order, self included) for which `pred`
/// returns true.
pub fn find<'a>(tag: &'a Tag, pred: &impl Fn(&Tag) -> bool) -> Option<&'a Tag> {
    if pred(tag) {
        return Some(tag);
    }
    tag.children()?.iter().find_map(|child| find(child, pred))
}

fn names_are_equal(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    a == b
}

/// Returns the first node (pre-order, self included) whose name equals
/// `name`. `None` matches an unnamed node (e.g. a list element).
pub fn find_by_name<'a>(tag: &'a Tag, name: Option<&[u8]>) -> Option<&'a Tag> {
    find(tag, &|t| names_are_equal(t.name(), name))
}

/// Resolves a dot-separated path starting at `tag` itself: each segment,
/// including the first, is matched against the *current* node's own name —
/// an empty segment matches a nameless node — and on a match with segments
/// still remaining, descent continues into the node's container children.
///
/// `find_by_path(tree, ".a.b")` on `Compound(name="") { Compound "a" {
/// Int "b" = 7 } }` matches `""` against the root's own (empty) name, then
/// descends to find a child named `a`, then within it a child named `b`.
pub fn find_by_path<'a>(tag: &'a Tag, path: &str) -> Option<&'a Tag> {
    let segments: Vec<&str> = path.split('.').collect();
    match_path(tag, &segments)
}

fn match_path<'a>(tag: &'a Tag, segments: &[&str]) -> Option<&'a Tag> {
    let (first, rest) = segments.split_first()?;
    if !name_matches(tag.name(), first) {
        return None;
    }
    if rest.is_empty() {
        return Some(tag);
    }
    tag.children()?.iter().find_map(|child| match_path(child, rest))
}

fn name_matches(name: Option<&[u8]>, segment: &str) -> bool {
    match name {
        None => segment.is_empty(),
        Some(bytes) => bytes == segment.as_bytes(),
    }
}

/// Builds a new tree keeping only the nodes of `tag` (itself included) for
/// which `pred` holds; a child that fails `pred` takes its whole subtree
/// with it. Returns `None` if `pred` rejects `tag` itself.
pub fn filter(tag: &Tag, pred: &impl Fn(&Tag) -> bool) -> Option<Tag> {
    if !pred(tag) {
        return None;
    }
    let mut out = tag.clone();
    filter_children_in_place(&mut out, pred);
    Some(out)
}

/// In-place counterpart of [`filter`]: consumes `tag`, pruning descendants
/// that fail `pred`. Returns `None` (dropping the whole tree) if `pred`
/// rejects `tag` itself.
pub fn filter_in_place(mut tag: Tag, pred: &impl Fn(&Tag) -> bool) -> Option<Tag> {
    if !pred(&tag) {
        return None;
    }
    filter_children_in_place(&mut tag, pred);
    Some(tag)
}

fn filter_children_in_place(tag: &mut Tag, pred: &impl Fn(&Tag) -> bool) {
    if let Some(children) = tag.children_mut() {
        children.retain(|c| pred(c));
        for child in children.iter_mut() {
            filter_children_in_place(child, pred);
        }
    }
}

/// The outcome of a `put_*` call: a reference to the child that was either
/// inserted or overwritten, and whether it was newly inserted. Replaces the
/// reference implementation's `nbtx_result { nbtx_node* reference; bool
/// inserted; }` with a borrow instead of a raw, possibly-null pointer.
pub struct PutOutcome<'a> {
    pub reference: &'a mut Tag,
    pub inserted: bool,
}

fn put(container: &mut Tag, name: Option<Vec<u8>>, payload: TagPayload) -> NbtResult<PutOutcome<'_>> {
    match container.payload_mut() {
        TagPayload::Compound(children) => {
            let name = match name {
                Some(n) => n,
                None => return parse_err("put into a Compound requires a name"),
            };
            if let Some(pos) = children.iter().position(|c| c.name.as_deref() == Some(name.as_slice())) {
                children[pos].payload = payload;
                return Ok(PutOutcome { reference: &mut children[pos], inserted: false });
            }
            children.push(Tag { name: Some(name), payload });
            let last = children.len() - 1;
            Ok(PutOutcome { reference: &mut children[last], inserted: true })
        }
        TagPayload::List { items, element_kind } => {
            if payload.kind() != *element_kind {
                return parse_err(format!(
                    "cannot put a {} into a list declared to hold {}",
                    payload.kind(),
                    element_kind
                ));
            }
            items.push(Tag { name: None, payload });
            let last = items.len() - 1;
            Ok(PutOutcome { reference: &mut items[last], inserted: true })
        }
        _ => parse_err(format!("cannot put into a {}: not a Compound or List", container.kind())),
    }
}

macro_rules! put_scalar_method {
    ($method:ident, $payload_variant:ident, $value_ty:ty) => {
        pub fn $method(
            &mut self,
            name: Option<impl Into<Vec<u8>>>,
            value: $value_ty,
        ) -> NbtResult<PutOutcome<'_>> {
            put(self, name.map(Into::into), TagPayload::$payload_variant(value))
        }
    };
}

impl Tag {
    put_scalar_method!(put_byte, Byte, i8);
    put_scalar_method!(put_ubyte, UByte, u8);
    put_scalar_method!(put_short, Short, i16);
    put_scalar_method!(put_ushort, UShort, u16);
    put_scalar_method!(put_int, Int, i32);
    put_scalar_method!(put_uint, UInt, u32);
    put_scalar_method!(put_long, Long, i64);
    put_scalar_method!(put_ulong, ULong, u64);
    put_scalar_method!(put_float, Float, f32);
    put_scalar_method!(put_double, Double, f64);
    put_scalar_method!(put_byte_array, ByteArray, Vec<u8>);

    pub fn put_string(
        &mut self,
        name: Option<impl Into<Vec<u8>>>,
        value: impl Into<Vec<u8>>,
    ) -> NbtResult<PutOutcome<'_>> {
        put(self, name.map(Into::into), TagPayload::String(value.into()))
    }

    pub fn put_list(
        &mut self,
        name: Option<impl Into<Vec<u8>>>,
        element_kind: TagKind,
    ) -> NbtResult<PutOutcome<'_>> {
        put(self, name.map(Into::into), TagPayload::List { element_kind, items: Vec::new() })
    }

    pub fn put_compound(&mut self, name: Option<impl Into<Vec<u8>>>) -> NbtResult<PutOutcome<'_>> {
        put(self, name.map(Into::into), TagPayload::Compound(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_tolerates_float_noise() {
        let a = Tag::double(Some("x"), 1.0);
        let b = Tag::double(Some("x"), 1.0 + 1e-7);
        assert_eq!(a, b);
        let c = Tag::double(Some("x"), 1.1);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_checks_names_and_order() {
        let mut a = Tag::new_compound(Some(""));
        a.children_mut().unwrap().push(Tag::int(Some("x"), 1));
        a.children_mut().unwrap().push(Tag::int(Some("y"), 2));
        let mut b = a.clone();
        assert_eq!(a, b);
        b.children_mut().unwrap().swap(0, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn size_counts_every_node() {
        let mut root = Tag::new_compound(Some(""));
        root.children_mut().unwrap().push(Tag::int(Some("x"), 1));
        let mut list = Tag::new_list(Some("l"), TagKind::TAG_Byte);
        list.children_mut().unwrap().push(Tag::byte(None::<Vec<u8>>, 1));
        list.children_mut().unwrap().push(Tag::byte(None::<Vec<u8>>, 2));
        root.children_mut().unwrap().push(list);
        // root + x + l + two bytes inside l = 5
        assert_eq!(size(&root), 5);
    }

    #[test]
    fn s4_nested_path_matches_leading_empty_root_name() {
        // Compound(name="") { Compound "a" { Int "b" = 7 } }
        let mut b = Tag::new_compound(Some(""));
        let mut a = Tag::new_compound(Some("a"));
        a.children_mut().unwrap().push(Tag::int(Some("b"), 7));
        b.children_mut().unwrap().push(a);

        let found = find_by_path(&b, ".a.b").unwrap();
        assert!(matches!(found.payload(), TagPayload::Int(7)));
    }

    #[test]
    fn find_by_path_rejects_a_mismatched_root_name() {
        let root = Tag::new_compound(Some("root"));
        assert!(find_by_path(&root, "other.b").is_none());
    }

    #[test]
    fn find_by_path_reports_an_unmatched_segment() {
        let mut root = Tag::new_compound(Some(""));
        root.children_mut().unwrap().push(Tag::int(Some("x"), 1));
        assert!(find_by_path(&root, ".missing").is_none());
    }

    #[test]
    fn filter_prunes_matching_subtrees() {
        let mut root = Tag::new_compound(Some(""));
        root.children_mut().unwrap().push(Tag::int(Some("keep"), 1));
        root.children_mut().unwrap().push(Tag::int(Some("drop"), 2));
        let kept = filter(&root, &|t| t.name() != Some(&b"drop"[..])).unwrap();
        assert_eq!(kept.children().unwrap().len(), 1);
        assert_eq!(kept.children().unwrap()[0].name(), Some(&b"keep"[..]));
    }

    #[test]
    fn filter_rejecting_the_root_yields_none() {
        let root = Tag::new_compound(Some("drop-me"));
        assert!(filter(&root, &|t| t.name() != Some(&b"drop-me"[..])).is_none());
    }

    #[test]
    fn filter_in_place_rejecting_the_root_yields_none() {
        let root = Tag::new_compound(Some("drop-me"));
        assert!(filter_in_place(root, &|t| t.name() != Some(&b"drop-me"[..])).is_none());
    }

    #[test]
    fn put_into_list_rejects_a_mismatched_kind() {
        let mut list = Tag::new_list(Some("l"), TagKind::TAG_Int);
        list.put_int(None::<Vec<u8>>, 1).unwrap();
        assert!(list.put_string(None::<Vec<u8>>, "nope").is_err());
        assert_eq!(list.children().unwrap().len(), 1);
    }

    #[test]
    fn put_into_compound_replaces_existing_name() {
        let mut root = Tag::new_compound(Some(""));
        let first = root.put_int(Some("x"), 1).unwrap();
        assert!(first.inserted);
        let second = root.put_int(Some("x"), 2).unwrap();
        assert!(!second.inserted);
        assert!(matches!(second.reference.payload(), TagPayload::Int(2)));
        assert_eq!(root.children().unwrap().len(), 1);
    }

    #[test]
    fn put_into_list_always_appends() {
        let mut list = Tag::new_list(Some("l"), TagKind::TAG_Int);
        list.put_int(None::<Vec<u8>>, 1).unwrap();
        let second = list.put_int(None::<Vec<u8>>, 2).unwrap();
        assert!(second.inserted);
        assert_eq!(list.children().unwrap().len(), 2);
    }

    #[test]
    fn put_requires_a_container() {
        let mut leaf = Tag::int(Some("x"), 1);
        assert!(leaf.put_int(Some("y"), 2).is_err());
    }
}
