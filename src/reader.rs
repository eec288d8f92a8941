use crate::chunk::ChunkTag;
use crate::error::{Error, Result};

/// Byte width of a single decoded sample
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SampleWidth {
    /// 8 bit, read as `i8`
    One = 1,
    /// 16 bit little-endian
    Two = 2,
    /// 32 bit little-endian
    Four = 4,
}

impl SampleWidth {
    /// Width for the given bit depth, `None` for unsupported depths
    pub fn from_bits(bits_per_sample: u16) -> Option<Self> {
        match bits_per_sample {
            8 => Some(SampleWidth::One),
            16 => Some(SampleWidth::Two),
            32 => Some(SampleWidth::Four),
            _ => None,
        }
    }

    /// Number of bytes consumed per sample
    pub fn bytes(self) -> usize {
        self as usize
    }
}

/// Cursor over an immutable byte buffer.
///
/// Every read either consumes exactly the bytes it decodes or fails with
/// [`Error::TruncatedInput`] and leaves the cursor where it was.
#[derive(Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at offset 0
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, pos: 0 }
    }

    /// Current cursor offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer
    pub fn total_len(&self) -> usize {
        self.bytes.len()
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// True once every byte has been consumed
    pub fn at_end(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::TruncatedInput {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }

        let bytes = &self.bytes[self.pos..self.pos + n];
        self.pos += n;

        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Consume a 4 byte tag and compare it against `expected`
    pub fn read_tag(&mut self, expected: ChunkTag) -> Result<ChunkTag> {
        let offset = self.pos;
        let found = ChunkTag::from_bytes(&self.take_array::<4>()?);

        if found != expected {
            return Err(Error::UnexpectedTag {
                expected,
                found,
                offset,
            });
        }

        Ok(found)
    }

    /// Consume a little-endian `u16`
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.take_array().map(u16::from_le_bytes)
    }

    /// Consume a little-endian `u32`
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.take_array().map(u32::from_le_bytes)
    }

    /// Consume one two's-complement little-endian sample of the given width
    pub fn read_signed(&mut self, width: SampleWidth) -> Result<i32> {
        match width {
            SampleWidth::One => self.take_array().map(|b| i8::from_le_bytes(b) as i32),
            SampleWidth::Two => self.take_array().map(|b| i16::from_le_bytes(b) as i32),
            SampleWidth::Four => self.take_array().map(i32::from_le_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let bytes = [0x22, 0x56, 0x88, 0x58, 0x01, 0x00];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.total_len(), 6);

        assert_eq!(reader.read_u16_le().unwrap(), 0x5622);
        assert_eq!(reader.read_u32_le().unwrap(), 0x0001_5888);
        assert!(reader.at_end());
    }

    #[test]
    fn reads_signed_samples() {
        let bytes = [
            0xff, // -1
            0x00, 0x80, // -32768
            0xff, 0xff, 0xff, 0x7f, // i32::MAX
            0x80, // -128
        ];
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(reader.read_signed(SampleWidth::One).unwrap(), -1);
        assert_eq!(reader.read_signed(SampleWidth::Two).unwrap(), -32768);
        assert_eq!(reader.read_signed(SampleWidth::Four).unwrap(), i32::MAX);
        assert_eq!(reader.read_signed(SampleWidth::One).unwrap(), -128);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn tag_mismatch_reports_offset() {
        let bytes = [0x00, 0x00, b'W', b'A', b'V', b'V'];
        let mut reader = ByteReader::new(&bytes);
        reader.read_u16_le().unwrap();

        assert_eq!(
            reader.read_tag(ChunkTag::Wave).unwrap_err(),
            Error::UnexpectedTag {
                expected: ChunkTag::Wave,
                found: ChunkTag::Unknown(*b"WAVV"),
                offset: 2,
            }
        );
    }

    #[test]
    fn short_read_does_not_move_cursor() {
        let bytes = [0x01, 0x02, 0x03];
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(
            reader.read_u32_le().unwrap_err(),
            Error::TruncatedInput {
                offset: 0,
                needed: 4,
                remaining: 3,
            }
        );
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16_le().unwrap(), 0x0201);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.total_len(), 3);
    }

    #[test]
    fn sample_width_from_bits() {
        assert_eq!(SampleWidth::from_bits(8), Some(SampleWidth::One));
        assert_eq!(SampleWidth::from_bits(16).map(SampleWidth::bytes), Some(2));
        assert_eq!(SampleWidth::from_bits(32).map(SampleWidth::bytes), Some(4));
        assert_eq!(SampleWidth::from_bits(24), None);
        assert_eq!(SampleWidth::from_bits(0), None);
    }
}
