//! Update command - fill empty MPN cells from the substitution list.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::bom::{BomRow, BomWorkbook};
use crate::diagnostics::{ConsoleDiagnostics, Diagnostics};
use crate::subs::SubstitutionTable;

/// Counts gathered during one update run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Data rows after the header
    pub rows: usize,
    /// Rows whose MPN was already filled in
    pub already_set: usize,
    /// Rows that received a substitute MPN
    pub filled: usize,
    /// Rows left empty because nothing matched
    pub unresolved: usize,
    /// Entries in the substitution list
    pub substitutions: usize,
}

impl UpdateSummary {
    pub fn missing(&self) -> usize {
        self.filled + self.unresolved
    }
}

/// Execute the update command.
pub fn execute(input: &Path, output: &Path, subs_csv: &Path) -> Result<()> {
    let mut diagnostics = ConsoleDiagnostics;
    let summary = update_bom(input, output, subs_csv, &mut diagnostics)?;

    println!(
        "{} Updated {} of {} missing MPNs ({} rows, {} already set, {} substitutions), wrote {}",
        "✓".green().bold(),
        summary.filled,
        summary.missing(),
        summary.rows,
        summary.already_set,
        summary.substitutions,
        output.display().to_string().cyan()
    );

    if summary.unresolved > 0 {
        println!(
            "{} {} lines still missing an MPN",
            "!".yellow(),
            summary.unresolved
        );
    }

    Ok(())
}

/// Fill every empty MPN in `input` from `subs_csv` and save to `output`.
///
/// Rows that already carry an MPN are never touched. Lookup misses are
/// reported through `diagnostics` and leave the cell empty.
pub fn update_bom(
    input: &Path,
    output: &Path,
    subs_csv: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> Result<UpdateSummary> {
    let mut bom = BomWorkbook::open(input)
        .with_context(|| format!("Failed to open BoM {}", input.display()))?;
    let subs = SubstitutionTable::load(subs_csv)
        .with_context(|| format!("Failed to load substitutions {}", subs_csv.display()))?;

    if subs.is_empty() {
        eprintln!("{} Substitution list is empty", "!".yellow());
    }

    let mut summary = UpdateSummary {
        substitutions: subs.len(),
        ..Default::default()
    };

    let rows: Vec<BomRow> = bom.rows()?;
    for row in rows {
        summary.rows += 1;

        if !row.mpn_is_empty() {
            summary.already_set += 1;
            continue;
        }

        match subs.find(&row.value, &row.footprint) {
            Some(mpn) => {
                bom.set_mpn(&row, mpn)?;
                summary.filled += 1;
            }
            None => {
                diagnostics.unmatched(&row.value, &row.footprint);
                summary.unresolved += 1;
            }
        }
    }

    bom.save(output)
        .with_context(|| format!("Failed to write BoM {}", output.display()))?;

    Ok(summary)
}
