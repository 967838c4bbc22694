//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// themelint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "themelint")]
#[command(about = "Conformance checker for CSS theme files")]
#[command(version)]
pub struct Cli {
    /// Path to a CSS theme file or a directory of theme files
    pub path: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Suppress per-file reports; only print the final result and hard errors
    #[arg(long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
