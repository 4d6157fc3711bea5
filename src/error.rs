use std::fmt;

/// The error taxonomy surfaced at every fallible boundary of the crate.
///
/// Unlike the reference C implementation (which sets a process-wide `errno`
/// and returns `NULL`), every fallible operation here returns a `Result`
/// carrying the error alongside the call.
#[derive(Debug)]
pub enum NbtError {
    /// Malformed input, a structural invariant violation, or a serialization
    /// refusal (heterogeneous list, oversize length, etc). Covers the
    /// reference's generic `NBTX_ERR`.
    Parse(String),
    /// Reserved for parity with the reference's `NBTX_EMEM`. Ordinary Rust
    /// allocation failure aborts the process rather than returning an error,
    /// so this variant is only reachable from `try_reserve`-based paths.
    OutOfMemory,
    /// Wraps a `std::io::Error` encountered while loading/saving a file.
    Io(std::io::Error),
    /// A gzip/zlib header could not be recognized, or the stream was corrupt.
    Compression(String),
}

pub type NbtResult<T> = Result<T, NbtError>;

impl fmt::Display for NbtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbtError::Parse(msg) => write!(f, "NBT tree is corrupt: {}", msg),
            NbtError::OutOfMemory => write!(f, "out of memory"),
            NbtError::Io(e) => write!(f, "IO error: {}", e),
            NbtError::Compression(msg) => write!(f, "compression error: {}", msg),
        }
    }
}

impl std::error::Error for NbtError {}

impl From<std::io::Error> for NbtError {
    fn from(e: std::io::Error) -> Self {
        NbtError::Io(e)
    }
}

pub(crate) fn parse_err<T>(msg: impl Into<String>) -> NbtResult<T> {
    Err(NbtError::Parse(msg.into()))
}
