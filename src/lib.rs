//! Strict `#![no_std]` parser for uncompressed PCM wav files.
//!
//! A file is accepted only when it is laid out exactly as `RIFF` header,
//! `fmt ` chunk, `data` chunk, with every size and rate field consistent.
//! Samples are de-interleaved into one `Vec<i32>` per channel.
//!
//! ```rust,no_run
//! use std::fs;
//! use std::path::Path;
//!
//! fn main() {
//!     let bytes = fs::read(Path::new("./test.wav")).unwrap();
//!     let wav = pcmwav::parse(&bytes).unwrap();
//!
//!     println!(
//!         "sample rate: {}, channels: {}, bit depth: {}",
//!         wav.fmt.sample_rate, wav.fmt.num_channels, wav.fmt.bits_per_sample
//!     );
//!
//!     for (i, samples) in wav.data.channel_data.iter().enumerate() {
//!         println!("channel {}: {:?}", i, &samples[..samples.len().min(100)]);
//!     }
//! }
//! ```
//!
//! Supported bit depths are 8, 16 and 32. 8 bit samples are read as signed
//! bytes.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod chunk;
mod data;
mod error;
mod fmt;
mod reader;
mod wav;

pub use chunk::{ChunkTag, RiffHeader};
pub use data::DataChunk;
pub use error::{Error, Result};
pub use fmt::FmtChunk;
pub use reader::{ByteReader, SampleWidth};
pub use wav::{parse, Wav};
