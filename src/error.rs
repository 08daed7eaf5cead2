//! Typed errors for the spreadsheet and substitution adapters.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BomError {
    #[error("failed to read spreadsheet {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("no sheet named '{0}' in workbook")]
    SheetNotFound(String),

    #[error("no header row starting with '{0}' found")]
    HeaderNotFound(String),

    #[error("header row {row} has no '{label}' column")]
    MpnColumnNotFound { row: u32, label: String },

    #[error("failed to write spreadsheet {path}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("failed to read substitution list {path}: {source}")]
    SubsRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("substitution list line {line}: expected 3 fields (value,footprint,mpn), found {found}")]
    MalformedSubstitution { line: u64, found: usize },
}
