use crate::error::NbtError;
use crate::parser::parse;
use crate::serializer::serialize;
use crate::tag::Tag;
use flate2::bufread::{GzDecoder, GzEncoder, ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use std::io::Read;

/// Which envelope a compressed document is wrapped in. The reference picks
/// this via `deflateInit2`'s `windowBits` argument (`+16` for gzip, plain
/// `15` for zlib); `flate2` exposes it as two distinct encoder types instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    Gzip,
    Zlib,
}

/// Compresses `bytes` under the given envelope, at the default compression
/// level (the reference's `Z_DEFAULT_COMPRESSION`).
pub fn compress(bytes: &[u8], strategy: Strategy) -> Result<Vec<u8>, NbtError> {
    let mut out = Vec::new();
    match strategy {
        Strategy::Gzip => {
            GzEncoder::new(bytes, Compression::default())
                .read_to_end(&mut out)
                .map_err(|e| NbtError::Compression(e.to_string()))?;
        }
        Strategy::Zlib => {
            ZlibEncoder::new(bytes, Compression::default())
                .read_to_end(&mut out)
                .map_err(|e| NbtError::Compression(e.to_string()))?;
        }
    }
    Ok(out)
}

/// Decompresses `bytes`, auto-detecting gzip vs zlib by magic bytes. The
/// reference gets this for free from zlib's `windowBits + 32` trick;
/// `flate2` has no single "auto" decoder, so the sniffing is done by hand.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, NbtError> {
    let mut out = Vec::new();
    match sniff(bytes)? {
        Strategy::Gzip => {
            GzDecoder::new(bytes).read_to_end(&mut out).map_err(|e| {
                log::debug!("gzip decompression failed: {}", e);
                NbtError::Compression(e.to_string())
            })?;
        }
        Strategy::Zlib => {
            ZlibDecoder::new(bytes).read_to_end(&mut out).map_err(|e| {
                log::debug!("zlib decompression failed: {}", e);
                NbtError::Compression(e.to_string())
            })?;
        }
    }
    Ok(out)
}

fn sniff(bytes: &[u8]) -> Result<Strategy, NbtError> {
    if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
        log::debug!("detected gzip envelope");
        return Ok(Strategy::Gzip);
    }
    if bytes.len() >= 2 {
        let header = (bytes[0] as u16) * 256 + bytes[1] as u16;
        if header % 31 == 0 && (bytes[0] & 0x0F) == 8 {
            log::debug!("detected zlib envelope");
            return Ok(Strategy::Zlib);
        }
    }
    log::warn!("input is neither gzip nor zlib (unrecognized magic bytes)");
    Err(NbtError::Compression("input is neither gzip nor zlib (unrecognized magic bytes)".into()))
}

/// Parses a document that has been gzip- or zlib-compressed, auto-detecting
/// the envelope.
pub fn parse_compressed(bytes: &[u8]) -> Result<Tag, NbtError> {
    parse(&decompress(bytes)?)
}

/// Serializes a tree and compresses the result under the given envelope.
pub fn dump_compressed(tree: &Tag, strategy: Strategy) -> Result<Vec<u8>, NbtError> {
    compress(&serialize(tree)?, strategy)
}
