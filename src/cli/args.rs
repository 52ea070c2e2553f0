//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{PluginSettings, DEFAULT_CACHETIME_MINUTES};

/// Snipfill - resolve embedded snippet directives against a remote origin.
#[derive(Debug, Parser)]
#[command(name = "snipfill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file to transform (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Base URL of the snippet origin server
    #[arg(short, long, env = "SNIPFILL_SERVER", default_value = "")]
    pub server: String,

    /// Directory for cached snippet files
    #[arg(long, default_value = ".snipfill-cache")]
    pub cache_dir: PathBuf,

    /// Cache lifetime in minutes (effective minimum is 10 minutes)
    #[arg(long, default_value_t = DEFAULT_CACHETIME_MINUTES)]
    pub cache_time: u64,

    /// Disable the snippet cache, forcing a refetch for every directive
    #[arg(long)]
    pub no_cache: bool,

    /// Write transformed text to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit accumulated messages as JSON on stderr
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Map the flag surface onto the raw settings form.
    pub fn settings(&self) -> PluginSettings {
        PluginSettings {
            server: self.server.clone(),
            cache: !self.no_cache,
            cachetime: self.cache_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_defaults() {
        let cli = Cli::parse_from(["snipfill"]);
        let settings = cli.settings();

        assert_eq!(settings.server, "");
        assert!(settings.cache);
        assert_eq!(settings.cachetime, 1440);
    }

    #[test]
    fn no_cache_flag_disables_cache() {
        let cli = Cli::parse_from(["snipfill", "--no-cache"]);
        assert!(!cli.settings().cache);
    }

    #[test]
    fn server_and_cache_time_map_through() {
        let cli = Cli::parse_from([
            "snipfill",
            "--server",
            "https://origin.example",
            "--cache-time",
            "30",
        ]);
        let settings = cli.settings();

        assert_eq!(settings.server, "https://origin.example");
        assert_eq!(settings.cachetime, 30);
    }

    #[test]
    fn input_and_output_paths_parse() {
        let cli = Cli::parse_from(["snipfill", "page.html", "--output", "out.html"]);
        assert_eq!(cli.input, Some(PathBuf::from("page.html")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
    }
}
