use crate::error::{parse_err, NbtResult};
use byteorder::{BigEndian, ByteOrder};

/// A bounds-checked, big-endian cursor over a borrowed byte slice.
///
/// Mirrors the reference's `(const char** memory, size_t* length)`
/// pair: every read advances the cursor and shrinks the remaining length,
/// and a short read is a parse error rather than undefined behavior. The
/// reader never allocates and never copies more than the caller asked for.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> NbtResult<&'a [u8]> {
        if self.remaining() < n {
            return parse_err(format!(
                "unexpected end of input: wanted {} bytes, {} remaining",
                n,
                self.remaining()
            ));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> NbtResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> NbtResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> NbtResult<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    pub fn read_u16(&mut self) -> NbtResult<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn read_i32(&mut self) -> NbtResult<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_u32(&mut self) -> NbtResult<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn read_i64(&mut self) -> NbtResult<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_u64(&mut self) -> NbtResult<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> NbtResult<f32> {
        Ok(BigEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> NbtResult<f64> {
        Ok(BigEndian::read_f64(self.take(8)?))
    }

    /// Reads `n` raw bytes, copied into an owned buffer.
    pub fn read_bytes(&mut self, n: usize) -> NbtResult<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }
}
