//! Command-line interface for snipfill.
//!
//! The CLI runs the library pipeline over a file or stdin: it maps the
//! flag surface onto [`PluginSettings`], applies the transformation, and
//! writes the result to stdout or a file. Accumulated messages go to
//! stderr, optionally as JSON.

pub mod args;

pub use args::Cli;

use anyhow::Context;
use std::fs;
use std::io::{self, Read, Write};

use crate::config::ResolutionConfig;
use crate::error::Result;
use crate::pipeline::apply;

/// Run the CLI against parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {path:?}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let settings = cli.settings();
    let config = ResolutionConfig::new(&settings, &cli.cache_dir);
    let (output, log) = apply(&text, &config);

    match &cli.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("Failed to write output file {path:?}"))?,
        None => io::stdout().write_all(output.as_bytes())?,
    }

    if !log.is_empty() {
        if cli.json {
            let rendered =
                serde_json::to_string_pretty(&log).context("Failed to serialize message log")?;
            eprintln!("{rendered}");
        } else {
            for warning in &log.warnings {
                eprintln!("warning: {warning}");
            }
            for error in &log.errors {
                eprintln!("error: {error}");
            }
        }
    }

    Ok(())
}
