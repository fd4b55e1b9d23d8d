use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod analyze;
mod bins;
mod config;
mod measures;

pub use config::GroupArg;

/// burst-stats - Burst timing statistics and group comparisons
#[derive(Parser)]
#[command(name = "burst-stats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output files written by `analyze --output`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document with every distribution
    Json,
    /// CSV tables per group and measure
    Csv,
    /// Both JSON and CSV
    #[default]
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare burst measure distributions between groups
    Analyze {
        /// Load groups, input layout and bins from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Add or override a group (repeatable), e.g. --group WT=MN1-Ib_WT.csv
        #[arg(short = 'g', long = "group", value_name = "NAME=PATH")]
        groups: Vec<GroupArg>,

        /// Number of header rows to skip in every burst table
        #[arg(long)]
        header_rows: Option<usize>,

        /// Directory for computed distributions
        #[arg(short = 'o', long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output file format
        #[arg(short = 'f', long, default_value = "both", value_enum)]
        format: OutputFormat,
    },

    /// Print the burst measures of every trial in a burst table
    Measures {
        /// Burst table path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Number of header rows to skip
        #[arg(long, default_value = "1")]
        header_rows: usize,
    },

    /// Print the bin edges used for each measure
    Bins {
        /// Load bin parameters from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
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
        Commands::Analyze {
            config,
            groups,
            header_rows,
            output,
            format,
        } => analyze::run(config, groups, header_rows, output, format),
        Commands::Measures { input, header_rows } => measures::run(input, header_rows),
        Commands::Bins { config } => bins::run(config),
    }
}
