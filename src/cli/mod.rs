use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use msl::document::MslDocument;

mod cas;
mod config;
mod info;
mod parse;

pub use config::OutputFormat;

/// msl - AMDIS Mass Spectral Library Parser
#[derive(Parser)]
#[command(name = "msl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for parsed records
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// One line per record
    Text,
    /// JSON array of records
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an MSL library and print its records
    Parse {
        /// Input MSL file path (`-` for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format (default: text)
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        /// Pretty-print JSON, or print full record blocks in text mode
        #[arg(long)]
        pretty: bool,

        /// Decode records in parallel (requires the parallel feature)
        #[arg(long)]
        parallel: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display summary statistics for an MSL library
    Info {
        /// Input MSL file path (`-` for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Hyphenate a raw CAS registry number
    Cas {
        /// CAS number digits, e.g. 1118689
        #[arg(value_name = "NUMBER")]
        number: String,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse {
            input,
            format,
            pretty,
            parallel,
            config,
        } => parse::run(input, format.map(OutputFormat::from), pretty, parallel, config),
        Commands::Info { input } => info::run(input),
        Commands::Cas { number } => cas::run(&number),
    }
}

/// Load a whole library from a file, or from stdin when the path is `-`
fn load_document(input: &Path, parallel: bool) -> Result<MslDocument> {
    let builder = MslDocument::builder().parallel(parallel);

    if input == Path::new("-") {
        let stdin = std::io::stdin();
        return builder
            .from_reader(stdin.lock())
            .context("Failed to read MSL library from stdin");
    }

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    builder
        .open(input)
        .with_context(|| format!("Failed to load MSL library: {}", input.display()))
}
