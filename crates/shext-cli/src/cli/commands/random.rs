//! Random command: print generated strings.

use anyhow::Result;
use shext_core::config::RandomConfig;
use shext_core::random::{self, RandomStringOptions};

/// Flags of the `random` subcommand.
#[derive(Debug, Clone, Default)]
pub struct RandomArgs {
    pub length: Option<usize>,
    pub letters: bool,
    pub numbers: bool,
    pub special: bool,
    pub count: usize,
}

impl RandomArgs {
    /// Classes picked on the command line, or the configured ones when no
    /// class flag was given.
    pub fn options(&self, cfg: &RandomConfig) -> RandomStringOptions {
        let mut opts = RandomStringOptions::empty();
        if self.letters {
            opts |= RandomStringOptions::LETTERS;
        }
        if self.numbers {
            opts |= RandomStringOptions::NUMBERS;
        }
        if self.special {
            opts |= RandomStringOptions::SPECIAL_CHARS;
        }
        if opts.is_empty() {
            cfg.options()
        } else {
            opts
        }
    }
}

pub fn run_random(cfg: &RandomConfig, args: RandomArgs) -> Result<()> {
    let options = args.options(cfg);
    tracing::debug!("random strings: {:?}, count {}", options, args.count);
    for _ in 0..args.count {
        let s = match args.length {
            Some(len) => random::random_string(len, options)?,
            None => random::random_string_between(cfg.min_length, cfg.max_length, options)?,
        };
        println!("{}", s);
    }
    Ok(())
}
