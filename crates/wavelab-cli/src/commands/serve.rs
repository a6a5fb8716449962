//! Directory server command.

use clap::Args;
use std::path::PathBuf;
use wavelab_serve::{DEFAULT_PORT, ServeConfig, serve};

#[derive(Args)]
pub struct ServeArgs {
    /// Directory to serve
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    println!("Listening on port {}. Press Ctrl+C to stop.", args.port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(ServeConfig {
        root: args.root,
        port: args.port,
    }))?;

    Ok(())
}
