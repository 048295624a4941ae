use clap::Parser;
use std::path::PathBuf;

/// Interactive word-list refinement
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word lists to load before the prompt opens
    pub files: Vec<PathBuf>,

    /// Read commands line by line from stdin instead of the interactive editor
    #[arg(long)]
    pub plain: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
