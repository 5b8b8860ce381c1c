use std::path::PathBuf;

use clap::Parser;

/// morphcloud: a GPU point cloud that morphs between shapes.
#[derive(Parser, Debug)]
#[command(name = "morphcloud", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON shape file to load instead of the configured catalog.
    #[arg(short = 's', long)]
    pub shapes: Option<PathBuf>,

    /// Seed for padding, per-vertex attributes and random targets.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
