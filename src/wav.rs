use crate::chunk::RiffHeader;
use crate::data::DataChunk;
use crate::error::{Error, Result};
use crate::fmt::FmtChunk;
use crate::reader::ByteReader;

/// Struct representing a parsed WAV file
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wav {
    /// Outer RIFF container header
    pub riff: RiffHeader,
    /// Contains data from the fmt chunk / header part of the file
    pub fmt: FmtChunk,
    /// Contains the samples, split per channel
    pub data: DataChunk,
}

/// Parse a complete WAV file held in memory.
///
/// The file must consist of exactly the RIFF header, a `fmt ` chunk and a
/// `data` chunk, in that order, with nothing after the samples.
///
/// ```
/// let bytes: [u8; 48] = [
///     0x52, 0x49, 0x46, 0x46, // RIFF
///     0x28, 0x00, 0x00, 0x00, // chunk size
///     0x57, 0x41, 0x56, 0x45, // WAVE
///     0x66, 0x6d, 0x74, 0x20, // fmt_
///     0x10, 0x00, 0x00, 0x00, // chunk size
///     0x01, 0x00, // audio format
///     0x02, 0x00, // num channels
///     0x80, 0xbb, 0x00, 0x00, // sample rate
///     0x00, 0xee, 0x02, 0x00, // byte rate
///     0x04, 0x00, // block align
///     0x10, 0x00, // bits per sample
///     0x64, 0x61, 0x74, 0x61, // data
///     0x04, 0x00, 0x00, 0x00, // chunk size
///     0x01, 0x00, 0xff, 0xff, // sample 1 L+R
/// ];
///
/// let wav = pcmwav::parse(&bytes).unwrap();
///
/// assert_eq!(wav.fmt.num_channels, 2);
/// assert_eq!(wav.fmt.sample_rate, 48_000);
/// assert_eq!(wav.data.channel_data, vec![vec![1], vec![-1]]);
/// ```
pub fn parse(bytes: &[u8]) -> Result<Wav> {
    let mut reader = ByteReader::new(bytes);

    let riff = RiffHeader::parse(&mut reader)?;
    let fmt = FmtChunk::parse(&mut reader)?;
    let data = DataChunk::parse(&mut reader, &fmt)?;

    if !reader.at_end() {
        return Err(Error::TrailingData(reader.remaining()));
    }

    Ok(Wav { riff, fmt, data })
}

impl Wav {
    /// Create new [`Wav`] instance from a slice of bytes, same as [`parse`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        parse(bytes)
    }

    /// Length of the audio in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.fmt.sample_rate == 0 {
            return 0.0;
        }

        self.data.num_frames() as f64 / self.fmt.sample_rate as f64
    }
}
