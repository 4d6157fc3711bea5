use crate::compress::{self, Strategy};
use crate::error::NbtResult;
use crate::parser::parse;
use crate::serializer::serialize;
use crate::tag::Tag;
use std::fs;
use std::path::Path;

/// Loads an uncompressed NBTx document from `path`.
pub fn load_path(path: impl AsRef<Path>) -> NbtResult<Tag> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Loads a gzip- or zlib-compressed NBTx document from `path`, auto-detecting
/// the envelope.
pub fn load_compressed_path(path: impl AsRef<Path>) -> NbtResult<Tag> {
    let bytes = fs::read(path)?;
    compress::parse_compressed(&bytes)
}

/// Serializes `tree` and writes it to `path` uncompressed.
pub fn save_path(tree: &Tag, path: impl AsRef<Path>) -> NbtResult<()> {
    let bytes = serialize(tree)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Serializes `tree`, compresses it under `strategy`, and writes it to
/// `path`.
pub fn save_compressed_path(tree: &Tag, path: impl AsRef<Path>, strategy: Strategy) -> NbtResult<()> {
    let bytes = compress::dump_compressed(tree, strategy)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_a_temp_file() {
        let mut root = Tag::new_compound(Some(""));
        root.children_mut().unwrap().push(Tag::int(Some("x"), 42));

        let mut path = std::env::temp_dir();
        path.push(format!("nbtx-io-test-{:p}.dat", &root));
        save_path(&root, &path).unwrap();
        let reparsed = load_path(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(root, reparsed);
    }
}
