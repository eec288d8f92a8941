use crate::chunk::ChunkTag;
use thiserror::Error;

/// Result type used by every parsing step
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for the different parsing failures.
///
/// The first failure aborts the whole parse, nothing partial is returned.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// A 4 byte chunk tag did not match the tag required at this position
    #[error("unexpected chunk tag at offset {offset}: expected {expected}, found {found}")]
    UnexpectedTag {
        /// Tag required at this position
        expected: ChunkTag,
        /// Tag actually read
        found: ChunkTag,
        /// Byte offset of the tag
        offset: usize,
    },

    /// The RIFF size field does not describe the buffer length
    #[error("invalid file size: declared {declared}, expected {expected}")]
    SizeMismatch {
        /// Value of the RIFF size field
        declared: u32,
        /// Buffer length minus 8
        expected: usize,
    },

    /// `byte_rate != sample_rate * num_channels * bits_per_sample / 8`
    #[error("invalid byte rate: {actual}, expected {expected}")]
    InvalidByteRate {
        /// Value of the byte rate field
        actual: u32,
        /// Byte rate derived from the other fmt fields
        expected: u64,
    },

    /// `block_align != num_channels * bits_per_sample / 8`
    #[error("invalid block align: {actual}, expected {expected}")]
    InvalidBlockAlign {
        /// Value of the block align field
        actual: u16,
        /// Block align derived from the other fmt fields
        expected: u32,
    },

    /// The fmt chunk declares zero channels
    #[error("fmt chunk declares no channels")]
    NoChannels,

    /// Only 8, 16 and 32 bit samples are decoded
    #[error("unsupported bits per sample: {0}")]
    UnsupportedBitDepth(u16),

    /// The data chunk does not hold a whole number of sample frames
    #[error("misaligned data size: {size} is not a multiple of the {frame_size} byte frame size")]
    MisalignedDataSize {
        /// Value of the data size field
        size: u32,
        /// Bytes per sample frame
        frame_size: u32,
    },

    /// A read ran past the end of the buffer
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// Cursor position of the failed read
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Bytes left over after the data chunk
    #[error("{0} trailing bytes after the data chunk")]
    TrailingData(usize),
}

impl Error {
    /// Name of the header field (or region) the error was raised for
    pub fn field(&self) -> &'static str {
        match self {
            Error::UnexpectedTag { expected, .. } => match expected {
                ChunkTag::Riff => "riff.chunk_id",
                ChunkTag::Wave => "riff.format",
                ChunkTag::Fmt => "fmt.id",
                ChunkTag::Data => "data.id",
                ChunkTag::Unknown(_) => "tag",
            },
            Error::SizeMismatch { .. } => "riff.declared_size",
            Error::InvalidByteRate { .. } => "fmt.byte_rate",
            Error::InvalidBlockAlign { .. } => "fmt.block_align",
            Error::NoChannels => "fmt.num_channels",
            Error::UnsupportedBitDepth(_) => "fmt.bits_per_sample",
            Error::MisalignedDataSize { .. } => "data.size",
            Error::TruncatedInput { .. } => "input",
            Error::TrailingData(_) => "input",
        }
    }
}
