use std::path::PathBuf;

use clap::Parser;

/// Draws a file of integer coordinates as a closed polygon.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Config {
    /// Whitespace separated integers, read pairwise as `x y` coordinates.
    #[arg(value_name = "INPUT", default_value = "./points/points-1000.txt")]
    pub(crate) input: PathBuf,

    /// Seed for the marker shades. Without it every run looks different.
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}
