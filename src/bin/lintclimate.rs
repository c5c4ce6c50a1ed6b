// src/bin/lintclimate.rs
use clap::Parser;
use colored::Colorize;

use lintclimate_core::cli::{handlers, Cli};
use lintclimate_core::exit::ReportExit;

fn main() -> ReportExit {
    let cli = Cli::parse();
    match handlers::run(&cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ReportExit::Error
        }
    }
}
