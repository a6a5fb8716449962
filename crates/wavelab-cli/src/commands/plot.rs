//! Waveform figure export command.

use clap::Args;
use std::path::PathBuf;
use wavelab_io::read_wav;
use wavelab_plot::{Figure, FigureFormat, FigureWriter, PlotStyle, Series};

#[derive(Args)]
pub struct PlotArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Figure name (may contain subfolders); defaults to the input stem
    #[arg(short, long)]
    output: Option<String>,

    /// Root directory figures are written below
    #[arg(long, default_value = "figures")]
    figures_root: PathBuf,

    /// Output format (repeatable): svg, csv, png, pdf
    #[arg(long = "format", default_value = "svg")]
    formats: Vec<String>,

    /// TOML style preset; defaults to the paper style
    #[arg(long)]
    style: Option<PathBuf>,

    /// Converter command template for png/pdf, e.g.
    /// "rsvg-convert -f {format} -o {output} {input}"
    #[arg(long)]
    converter: Option<String>,

    /// Number of waveform buckets to decimate to
    #[arg(long, default_value = "1024")]
    buckets: usize,
}

/// Peak-decimate samples into per-bucket (time, min) and (time, max)
/// envelopes. Full resolution would put millions of points in a figure;
/// the min/max envelope keeps transients visible at any zoom.
fn envelope(samples: &[f32], sample_rate: u32, buckets: usize) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let buckets = buckets.max(1).min(samples.len().max(1));
    let chunk = samples.len().div_ceil(buckets).max(1);
    let mut lows = Vec::with_capacity(buckets);
    let mut highs = Vec::with_capacity(buckets);

    for (i, frame) in samples.chunks(chunk).enumerate() {
        let t = (i * chunk) as f64 / f64::from(sample_rate);
        let lo = frame.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = frame.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        lows.push((t, f64::from(lo)));
        highs.push((t, f64::from(hi)));
    }

    (lows, highs)
}

pub fn run(args: PlotArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f64 / f64::from(spec.sample_rate)
    );

    let name = match &args.output {
        Some(name) => name.clone(),
        None => args
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "waveform".to_string()),
    };

    let style = match &args.style {
        Some(path) => PlotStyle::load(path)?,
        None => PlotStyle::paper(0.7),
    };

    let (lows, highs) = envelope(&samples, spec.sample_rate, args.buckets);
    let mut figure = Figure::new(name.clone()).with_labels("time [s]", "amplitude");
    // Same label on both envelope halves: the legend de-duplicates.
    figure.push(Series::line("waveform", highs));
    figure.push(Series::line("waveform", lows));

    let formats = args
        .formats
        .iter()
        .map(|f| f.parse::<FigureFormat>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer = FigureWriter::new(&args.figures_root, formats);
    if let Some(converter) = &args.converter {
        writer = writer.with_converter(converter.clone());
    }

    for path in writer.write(&name, &figure, &style)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
