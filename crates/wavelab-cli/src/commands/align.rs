//! Cross-correlation alignment command.

use clap::Args;
use std::path::PathBuf;
use wavelab_core::{apply_alignment, estimate_alignment};
use wavelab_io::{WavSpec, read_wav, write_wav};

#[derive(Args)]
pub struct AlignArgs {
    /// WAV file to align
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Reference WAV file
    #[arg(value_name = "REFERENCE")]
    reference: PathBuf,

    /// Output WAV file for the aligned signal
    #[arg(short, long)]
    output: PathBuf,

    /// Output bit depth (8, 16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: AlignArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (samples, _) = read_wav(&args.input)?;
    println!("Reading {}...", args.reference.display());
    let (reference, ref_spec) = read_wav(&args.reference)?;

    let alignment = estimate_alignment(&samples, &reference);
    println!(
        "  lag: {} samples ({:.3}s){}",
        alignment.lag,
        alignment.lag as f64 / f64::from(ref_spec.sample_rate),
        if alignment.inverted {
            ", polarity inverted"
        } else {
            ""
        }
    );
    tracing::debug!("correlation peak: {}", alignment.peak);

    let aligned = apply_alignment(&samples, &alignment);
    let out_spec = WavSpec {
        channels: 1,
        sample_rate: ref_spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };
    write_wav(&args.output, &aligned, out_spec)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
