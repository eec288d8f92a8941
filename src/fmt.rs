use crate::chunk::ChunkTag;
use crate::error::{Error, Result};
use crate::reader::ByteReader;

/// Struct representing the `fmt ` section of a WAV file
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FmtChunk {
    /// Always [`ChunkTag::Fmt`]
    pub id: ChunkTag,
    /// size of the rest of the chunk, `16` for plain PCM
    pub sub_chunk_size: u32,
    /// format code, `1` for PCM. Read but not enforced.
    pub audio_format: u16,
    /// number of audio channels in the sample data, channels are interleaved
    pub num_channels: u16,
    /// sample rate, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate: u32,
    /// bytes per second, `sample_rate * block_align`
    pub byte_rate: u32,
    /// bytes per sample frame, `num_channels * bits_per_sample / 8`
    pub block_align: u16,
    /// bit depth for each sample, one of `8`, `16` or `32`
    pub bits_per_sample: u16,
}

impl FmtChunk {
    pub(crate) fn parse(reader: &mut ByteReader) -> Result<Self> {
        let id = reader.read_tag(ChunkTag::Fmt)?;
        let sub_chunk_size = reader.read_u32_le()?;
        let audio_format = reader.read_u16_le()?;
        let num_channels = reader.read_u16_le()?;
        let sample_rate = reader.read_u32_le()?;
        let byte_rate = reader.read_u32_le()?;
        let block_align = reader.read_u16_le()?;
        let bits_per_sample = reader.read_u16_le()?;

        let channels = num_channels as u64;
        let bits = bits_per_sample as u64;

        let expected_byte_rate = sample_rate as u64 * channels * bits / 8;
        if byte_rate as u64 != expected_byte_rate {
            return Err(Error::InvalidByteRate {
                actual: byte_rate,
                expected: expected_byte_rate,
            });
        }

        let expected_block_align = (channels * bits / 8) as u32;
        if block_align as u32 != expected_block_align {
            return Err(Error::InvalidBlockAlign {
                actual: block_align,
                expected: expected_block_align,
            });
        }

        if num_channels == 0 {
            return Err(Error::NoChannels);
        }

        Ok(FmtChunk {
            id,
            sub_chunk_size,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    /// Bytes per single sample
    pub fn bytes_per_sample(&self) -> usize {
        (self.bits_per_sample / 8) as usize
    }

    /// Bytes per sample frame, one sample for every channel
    pub fn frame_size(&self) -> usize {
        self.num_channels as usize * self.bytes_per_sample()
    }

    /// True for the plain PCM format code
    pub fn is_pcm(&self) -> bool {
        self.audio_format == 1
    }
}
