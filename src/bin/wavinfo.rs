//! wavinfo - inspect a PCM wav file
//!
//! Loads the whole file into memory, parses it with `pcmwav` and prints
//! either a summary or the full parse result as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};
use pcmwav::Wav;

#[derive(Parser, Debug)]
#[command(name = "wavinfo", version, about = "Inspect an uncompressed PCM wav file")]
struct Cli {
    /// Path to the wav file
    path: PathBuf,

    /// Print the full parse result as JSON
    #[arg(long)]
    json: bool,

    /// Number of leading samples to print
    #[arg(long, default_value_t = 0)]
    preview: usize,

    /// Channel to preview
    #[arg(long, default_value_t = 0)]
    channel: usize,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = fs::read(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    info!("read {} bytes from {}", bytes.len(), cli.path.display());

    let wav = pcmwav::parse(&bytes)
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;

    debug!("{:?}", wav.fmt);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&wav)?);
        return Ok(());
    }

    print_summary(&wav);

    if cli.preview > 0 {
        let samples = wav.data.channel(cli.channel).with_context(|| {
            format!(
                "channel {} out of range, file has {}",
                cli.channel,
                wav.data.num_channels()
            )
        })?;
        let end = cli.preview.min(samples.len());

        println!("channel {} [0..{}]: {:?}", cli.channel, end, &samples[..end]);
    }

    Ok(())
}

fn print_summary(wav: &Wav) {
    println!("riff size:       {}", wav.riff.declared_size);
    println!("audio format:    {}", wav.fmt.audio_format);
    println!("channels:        {}", wav.fmt.num_channels);
    println!("sample rate:     {}", wav.fmt.sample_rate);
    println!("byte rate:       {}", wav.fmt.byte_rate);
    println!("block align:     {}", wav.fmt.block_align);
    println!("bits per sample: {}", wav.fmt.bits_per_sample);
    println!("data size:       {}", wav.data.size);
    println!("frames:          {}", wav.data.num_frames());
    println!("duration:        {:.3}s", wav.duration_secs());
}
