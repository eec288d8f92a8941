use crate::error::{Error, Result};
use crate::reader::ByteReader;
use core::fmt;

/// RIFF chunks are tagged with 4 byte identifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChunkTag {
    /// Root level "chunk"
    Riff,
    /// File identifier, located right after the RIFF tag and chunk size
    Wave,
    /// Format chunk, contains the sample rate, bit depth and number of channels.
    Fmt,
    /// Data chunk, contains the (interleaved) samples.
    Data,
    /// Any other tag, only ever seen in error reports.
    Unknown([u8; 4]),
}

impl ChunkTag {
    pub(crate) fn from_bytes(bytes: &[u8; 4]) -> Self {
        match bytes {
            b"RIFF" => ChunkTag::Riff,
            b"WAVE" => ChunkTag::Wave,
            b"fmt " => ChunkTag::Fmt,
            b"data" => ChunkTag::Data,
            _ => ChunkTag::Unknown(*bytes),
        }
    }

    /// Raw 4 byte representation of the tag
    pub fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => *b"RIFF",
            ChunkTag::Wave => *b"WAVE",
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
            ChunkTag::Unknown(bytes) => bytes,
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for b in self.to_bytes() {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        f.write_str("\"")
    }
}

/// Outer `RIFF` container header of a WAV file
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiffHeader {
    /// Always [`ChunkTag::Riff`]
    pub chunk_id: ChunkTag,
    /// Size field, the length of the file minus the 8 bytes of tag and size
    pub declared_size: u32,
    /// Always [`ChunkTag::Wave`]
    pub format: ChunkTag,
}

impl RiffHeader {
    /// Parse the 12 byte header, checking the size field against the length
    /// of the whole buffer behind `reader`.
    ///
    /// Leaves the reader positioned right after the `WAVE` tag.
    pub(crate) fn parse(reader: &mut ByteReader) -> Result<Self> {
        let chunk_id = reader.read_tag(ChunkTag::Riff)?;
        let declared_size = reader.read_u32_le()?;
        let format = reader.read_tag(ChunkTag::Wave)?;

        // at least 12 bytes were consumed so this can't underflow
        let expected = reader.total_len() - 8;

        if declared_size as usize != expected {
            return Err(Error::SizeMismatch {
                declared: declared_size,
                expected,
            });
        }

        Ok(RiffHeader {
            chunk_id,
            declared_size,
            format,
        })
    }
}
