//! themelint CLI entry point

use clap::Parser;
use std::process;
use themelint::cli::args::Cli;

fn main() {
    let cli = Cli::parse();
    process::exit(themelint::cli::check::run(&cli));
}
