//! # NBTx
//!
//! NBTx is a tagged binary tree format derived from Minecraft's Named Binary
//! Tag (NBT), extended with four unsigned integer tag kinds (`UByte`,
//! `UShort`, `UInt`, `ULong`) alongside the original signed ones.
//!
//! ## Key features
//! - A single recursive [`Tag`] node model: every tag carries an optional
//!   name and a payload, with `List` and `Compound` payloads holding ordered
//!   children.
//! - Byte-exact, allocation-free parsing from a borrowed `&[u8]`
//!   ([`parse`]) and its inverse, byte-exact serialization ([`serialize`]).
//! - A small tree algebra: structural equality with float tolerance,
//!   pre-order `map`/`find`/`find_by_name`/`find_by_path`, cloning and
//!   in-place `filter`, `size`, and `put_*` insert-or-replace primitives.
//! - An ASCII pretty-printer ([`ascii::dump_ascii`]) with a configurable
//!   [`ascii::Style`].
//! - Optional gzip/zlib compression ([`compress`]) with auto-detection on
//!   decompress, and file helpers ([`io`]).
//!
//! ## Quick start
//! ```
//! use nbtx::Tag;
//!
//! let mut root = Tag::new_compound(Some(""));
//! root.put_string(Some("name"), "Bananrama").unwrap();
//! root.put_int(Some("age"), 1).unwrap();
//!
//! let bytes = nbtx::serialize(&root).unwrap();
//! let parsed = nbtx::parse(&bytes).unwrap();
//! assert_eq!(root, parsed);
//! ```

pub mod algebra;
pub mod ascii;
pub mod compress;
pub mod error;
pub mod io;
pub mod kind;
pub mod parser;
pub mod reader;
pub mod serializer;
pub mod tag;
pub mod writer;

pub use algebra::{find, find_by_name, find_by_path, filter, filter_in_place, map, size, PutOutcome};
pub use ascii::{dump_ascii, ByteArrayRadix, Brace, Style};
pub use compress::{compress as compress_bytes, decompress, dump_compressed, parse_compressed, Strategy};
pub use error::{NbtError, NbtResult};
pub use io::{load_compressed_path, load_path, save_compressed_path, save_path};
pub use kind::TagKind;
pub use parser::parse;
pub use serializer::serialize;
pub use tag::{Tag, TagPayload};
