//! WAV metadata command.

use clap::Args;
use std::path::PathBuf;
use wavelab_io::{WavFormat, read_wav_info};

#[derive(Args)]
pub struct InfoArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.input)?;

    println!("{}", args.input.display());
    println!("  channels:        {}", info.channels);
    println!("  sample rate:     {} Hz", info.sample_rate);
    println!("  bits per sample: {}", info.bits_per_sample);
    println!(
        "  format:          {}",
        match info.format {
            WavFormat::Pcm => "PCM",
            WavFormat::IeeeFloat => "IEEE float",
        }
    );
    println!("  frames:          {}", info.num_frames);
    println!("  duration:        {:.3}s", info.duration_secs);

    Ok(())
}
