use clap::Parser;
use std::path::PathBuf;

use crate::adapters::InputFormat;
use crate::emitter::DescriptionStyle;

#[derive(Parser)]
#[command(name = "lintclimate", version, about = "Convert flake8 reports to GitLab CodeClimate JSON")]
pub struct Cli {
    /// Read the report from FILE instead of stdin
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the issue JSON to FILE instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also copy the JSON stream to stdout when writing to a file
    #[arg(long)]
    pub tee: bool,

    /// Input line format
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    /// Issue description rendering (overrides the config file)
    #[arg(long, value_enum)]
    pub description: Option<DescriptionStyle>,

    /// Load configuration from FILE instead of lintclimate.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Warn about each skipped input line
    #[arg(long, short)]
    pub verbose: bool,
}
