// src/cli/handlers.rs
//! The conversion driver: wires input, config, classifier, and emitter.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use colored::Colorize;

use crate::adapters::parse_line;
use crate::classify::Classifier;
use crate::cli::args::Cli;
use crate::config::Config;
use crate::emitter::IssueEmitter;
use crate::error::ReportError;
use crate::exit::ReportExit;

/// Runs one report conversion according to the CLI arguments.
///
/// Unparseable input lines are skipped and counted, never fatal. The sink is
/// opened and closed here; the emitter only writes to it.
///
/// # Errors
/// Returns error on I/O failure or emitter misuse.
pub fn run(cli: &Cli) -> anyhow::Result<ReportExit> {
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return invalid_input(&e),
    };
    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => return invalid_input(&e),
    };
    let style = cli.description.unwrap_or(config.description);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)?;
            if cli.tee {
                Box::new(TeeWriter::new(file))
            } else {
                Box::new(file)
            }
        }
        None => Box::new(io::stdout()),
    };

    let mut emitter = IssueEmitter::new(BufWriter::new(sink), Classifier::new(registry), style);
    let mut skipped: usize = 0;

    emitter.start()?;
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line, cli.format) {
            Some(violation) => emitter.handle(&violation)?,
            None => {
                skipped += 1;
                if cli.verbose {
                    eprintln!("{} unmatched line: {line:?}", "warning:".yellow().bold());
                }
            }
        }
    }
    emitter.stop()?;

    if skipped > 0 {
        eprintln!(
            "{} Ignored {skipped} input lines",
            "warning:".yellow().bold()
        );
    }
    Ok(ReportExit::Success)
}

fn invalid_input(e: &ReportError) -> anyhow::Result<ReportExit> {
    eprintln!("{} {e}", "error:".red().bold());
    Ok(ReportExit::InvalidInput)
}

/// Duplicates every write to stdout. Used for `--tee` so CI logs show the
/// artifact that went to the output file.
struct TeeWriter {
    primary: File,
}

impl TeeWriter {
    fn new(primary: File) -> Self {
        Self { primary }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        io::stdout().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        io::stdout().flush()
    }
}
