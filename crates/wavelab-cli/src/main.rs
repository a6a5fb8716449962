//! Wavelab CLI - command-line interface for the wavelab research helpers.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wavelab")]
#[command(author, version, about = "Audio research helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show WAV file metadata
    Info(commands::info::InfoArgs),

    /// Align a WAV file to a reference recording
    Align(commands::align::AlignArgs),

    /// Export a waveform figure in one or more formats
    Plot(commands::plot::PlotArgs),

    /// Serve a directory over HTTP with inline audio players
    Serve(commands::serve::ServeArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Align(args) => commands::align::run(args),
        Commands::Plot(args) => commands::plot::run(args),
        Commands::Serve(args) => commands::serve::run(args),
    }
}
