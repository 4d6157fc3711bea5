use byteorder::{BigEndian, ByteOrder};

/// A grow-on-demand, append-only byte buffer with typed big-endian append
/// primitives. The serializer's mirror of [`crate::reader::Reader`].
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Writer {
        Writer { buf: Vec::new() }
    }

    pub fn reserve(&mut self, n: usize) {
        self.buf.reserve(n);
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    pub fn write_i16(&mut self, v: i16) {
        let mut tmp = [0u8; 2];
        BigEndian::write_i16(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_u16(&mut self, v: u16) {
        let mut tmp = [0u8; 2];
        BigEndian::write_u16(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_i32(&mut self, v: i32) {
        let mut tmp = [0u8; 4];
        BigEndian::write_i32(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_u32(&mut self, v: u32) {
        let mut tmp = [0u8; 4];
        BigEndian::write_u32(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_i64(&mut self, v: i64) {
        let mut tmp = [0u8; 8];
        BigEndian::write_i64(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_u64(&mut self, v: u64) {
        let mut tmp = [0u8; 8];
        BigEndian::write_u64(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_f32(&mut self, v: f32) {
        let mut tmp = [0u8; 4];
        BigEndian::write_f32(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn write_f64(&mut self, v: f64) {
        let mut tmp = [0u8; 8];
        BigEndian::write_f64(&mut tmp, v);
        self.append(&tmp);
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
