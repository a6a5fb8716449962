//! CLI subcommand implementations.

pub mod align;
pub mod info;
pub mod plot;
pub mod serve;
