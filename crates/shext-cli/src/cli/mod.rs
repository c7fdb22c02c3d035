//! CLI for the shext helpers.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shext_core::config;
use std::path::Path;

use commands::{
    run_base64, run_config, run_hex, run_list, run_random, run_transliterate, run_unhex,
    RandomArgs,
};

/// Top-level CLI for the shext helpers.
#[derive(Debug, Parser)]
#[command(name = "shext")]
#[command(about = "shext: string, random, listing and XML helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format for `shext config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Xml,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate random strings.
    Random {
        /// Exact length; when omitted a length is picked from the configured range.
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Include letters.
        #[arg(long)]
        letters: bool,
        /// Include digits.
        #[arg(long)]
        numbers: bool,
        /// Include punctuation.
        #[arg(long)]
        special: bool,
        /// How many strings to print.
        #[arg(long, default_value = "1", value_name = "N")]
        count: usize,
    },

    /// Transliterate Russian text to Latin.
    Transliterate {
        /// Text to transliterate.
        text: String,
        /// Produce a lowercase URL slug instead of keeping case and punctuation.
        #[arg(long)]
        url: bool,
    },

    /// Print the UTF-8 bytes of a string as spaced hex.
    Hex {
        text: String,
    },

    /// Decode spaced or compact hex and print it as text.
    Unhex {
        hex: String,
    },

    /// Print the base64 encoding of a string.
    Base64 {
        text: String,
    },

    /// List every file under a directory, recursively.
    List {
        /// Root directory.
        dir: String,
        /// File name pattern such as `*.txt` (defaults to the configured pattern).
        #[arg(long, short = 'p')]
        pattern: Option<String>,
    },

    /// Print the effective configuration.
    Config {
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Random {
                length,
                letters,
                numbers,
                special,
                count,
            } => run_random(
                &cfg.random,
                RandomArgs {
                    length,
                    letters,
                    numbers,
                    special,
                    count,
                },
            )?,
            CliCommand::Transliterate { text, url } => run_transliterate(&text, url),
            CliCommand::Hex { text } => run_hex(&text),
            CliCommand::Unhex { hex } => run_unhex(&hex)?,
            CliCommand::Base64 { text } => run_base64(&text),
            CliCommand::List { dir, pattern } => {
                let pattern = pattern.or_else(|| cfg.listing.pattern.clone());
                run_list(Path::new(&dir), pattern.as_deref())?;
            }
            CliCommand::Config { format } => run_config(&cfg, format)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
