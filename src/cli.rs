//! Command-line interface for ascii-tetris.

use std::path::PathBuf;

use clap::Parser;

/// ASCII Tetris - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-tetris")]
#[command(about = "Falling-block puzzle game rendered in plain ASCII", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the piece sequence (random if omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write logs to this file; filter with RUST_LOG (default: info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
