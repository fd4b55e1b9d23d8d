//! # burst-stats
//!
//! Command-line front end for burst timing statistics.
//!
//! ## Usage
//!
//! ```bash
//! # Compare groups listed in a config file, writing JSON and CSV tables
//! burst-stats analyze --config comparison.toml --output results/
//!
//! # Compare two burst tables directly
//! burst-stats analyze --group WT=MN1-Ib_WT.csv --group EKI=MN1-Ib_EKI.csv
//!
//! # Inspect one table's per-trial measures
//! burst-stats measures MN1-Ib_WT.csv
//!
//! # Show the bin edges in use
//! burst-stats bins --config comparison.toml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
