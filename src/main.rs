//! update_bom - fill missing MPNs in a BoM spreadsheet.
//!
//! Rows of the `BoM` sheet whose MPN cell is empty get a generic part number
//! from a substitution list, matched on component value and footprint.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod bom;
mod commands;
mod diagnostics;
mod error;
mod subs;

#[derive(Parser)]
#[command(name = "update_bom")]
#[command(
    author,
    version,
    about = "Update missing MPN lines from substitution list based on value and footprint"
)]
struct Cli {
    /// Input BoM file (.xlsx)
    input: PathBuf,

    /// Output BoM file
    output: PathBuf,

    /// List of substitutions in CSV (value,footprint,mpn)
    subs_csv: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::update::execute(&cli.input, &cli.output, &cli.subs_csv)
}
