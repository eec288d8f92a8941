use crate::chunk::ChunkTag;
use crate::error::{Error, Result};
use crate::fmt::FmtChunk;
use crate::reader::{ByteReader, SampleWidth};
use alloc::vec;
use alloc::vec::Vec;

/// Struct representing the `data` section of a WAV file
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataChunk {
    /// Always [`ChunkTag::Data`]
    pub id: ChunkTag,
    /// Byte length of the sample payload
    pub size: u32,
    /// De-interleaved samples, one `Vec` per channel, all of equal length
    pub channel_data: Vec<Vec<i32>>,
}

impl DataChunk {
    /// Decode the data chunk using the layout described by `fmt`.
    pub(crate) fn parse(reader: &mut ByteReader, fmt: &FmtChunk) -> Result<Self> {
        let id = reader.read_tag(ChunkTag::Data)?;
        let size = reader.read_u32_le()?;

        let width = SampleWidth::from_bits(fmt.bits_per_sample)
            .ok_or(Error::UnsupportedBitDepth(fmt.bits_per_sample))?;

        let num_channels = fmt.num_channels as usize;
        let frame_size = num_channels * width.bytes();

        if frame_size == 0 || size as usize % frame_size != 0 {
            return Err(Error::MisalignedDataSize {
                size,
                frame_size: frame_size as u32,
            });
        }

        // fail before allocating for a payload that isn't there
        if size as usize > reader.remaining() {
            return Err(Error::TruncatedInput {
                offset: reader.position(),
                needed: size as usize,
                remaining: reader.remaining(),
            });
        }

        let num_frames = size as usize / frame_size;
        let mut channel_data = vec![vec![0i32; num_frames]; num_channels];

        for frame in 0..num_frames {
            for channel in channel_data.iter_mut() {
                channel[frame] = reader.read_signed(width)?;
            }
        }

        Ok(DataChunk {
            id,
            size,
            channel_data,
        })
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channel_data.len()
    }

    /// Number of sample frames, i.e. samples per channel
    pub fn num_frames(&self) -> usize {
        self.channel_data.first().map_or(0, Vec::len)
    }

    /// Samples of a single channel
    pub fn channel(&self, index: usize) -> Option<&[i32]> {
        self.channel_data.get(index).map(Vec::as_slice)
    }
}
