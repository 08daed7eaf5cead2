//! BoM spreadsheet access.
//!
//! The workbook must contain a sheet named `BoM`. Its header row is the first
//! row whose leading cell reads `Row`; the MPN column is located by label in
//! that row, while value and footprint sit at fixed columns.

#[cfg(test)]
pub(crate) mod fixtures;
mod sheet;

pub use sheet::{BomRow, BomWorkbook};
