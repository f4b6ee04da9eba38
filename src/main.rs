//! # msl
//!
//! A command-line tool for inspecting AMDIS MSL mass spectral libraries.
//!
//! ## Usage
//!
//! ```bash
//! # Print every record as JSON
//! msl parse NIST.MSL --format json --pretty
//!
//! # Summarize a library
//! msl info NIST.MSL
//!
//! # Hyphenate a raw CAS number
//! msl cas 1118689
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
