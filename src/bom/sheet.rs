//! Workbook adapter over `umya-spreadsheet`.

use std::path::Path;

use umya_spreadsheet::{reader, writer, Spreadsheet, Worksheet};

use crate::error::BomError;

/// Sheet holding the bill of materials.
pub const SHEET_NAME: &str = "BoM";
/// Leading cell value that marks the header row.
pub const HEADER_MARKER: &str = "Row";
/// Header label of the MPN column.
pub const MPN_LABEL: &str = "MPN";

const VALUE_COLUMN: u32 = 4;
const FOOTPRINT_COLUMN: u32 = 6;

/// Column layout of the BoM sheet (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BomColumns {
    pub value: u32,
    pub footprint: u32,
    pub mpn: u32,
}

/// Snapshot of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomRow {
    /// Sheet row number (1-indexed)
    pub row: u32,
    pub value: String,
    pub footprint: String,
    pub mpn: String,
}

impl BomRow {
    /// True when the MPN cell holds exactly the empty string (or is absent).
    pub fn mpn_is_empty(&self) -> bool {
        self.mpn.is_empty()
    }
}

/// A loaded workbook together with the detected BoM layout.
pub struct BomWorkbook {
    book: Spreadsheet,
    header_row: u32,
    columns: BomColumns,
}

impl BomWorkbook {
    /// Read a workbook from disk and detect its BoM layout.
    pub fn open(path: &Path) -> Result<Self, BomError> {
        let book = reader::xlsx::read(path).map_err(|e| BomError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_spreadsheet(book)
    }

    /// Wrap an in-memory spreadsheet, failing if the BoM layout can't be found.
    pub fn from_spreadsheet(book: Spreadsheet) -> Result<Self, BomError> {
        let sheet = book
            .get_sheet_by_name(SHEET_NAME)
            .ok_or_else(|| BomError::SheetNotFound(SHEET_NAME.to_string()))?;
        let (header_row, columns) = detect_layout(sheet)?;

        Ok(Self {
            book,
            header_row,
            columns,
        })
    }

    /// All rows after the header, in sheet order.
    pub fn rows(&self) -> Result<Vec<BomRow>, BomError> {
        let sheet = self.sheet()?;
        let cols = self.columns;

        Ok((self.header_row + 1..=sheet.get_highest_row())
            .map(|row| BomRow {
                row,
                value: sheet.get_value((cols.value, row)),
                footprint: sheet.get_value((cols.footprint, row)),
                mpn: sheet.get_value((cols.mpn, row)),
            })
            .collect())
    }

    /// Write `mpn` into the MPN cell of `row`.
    pub fn set_mpn(&mut self, row: &BomRow, mpn: &str) -> Result<(), BomError> {
        let col = self.columns.mpn;
        self.sheet_mut()?
            .get_cell_mut((col, row.row))
            .set_value_string(mpn);
        Ok(())
    }

    /// Write the whole workbook, untouched sheets included, to `path`.
    pub fn save(&self, path: &Path) -> Result<(), BomError> {
        writer::xlsx::write(&self.book, path).map_err(|e| BomError::Save {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn sheet(&self) -> Result<&Worksheet, BomError> {
        self.book
            .get_sheet_by_name(SHEET_NAME)
            .ok_or_else(|| BomError::SheetNotFound(SHEET_NAME.to_string()))
    }

    fn sheet_mut(&mut self) -> Result<&mut Worksheet, BomError> {
        self.book
            .get_sheet_by_name_mut(SHEET_NAME)
            .ok_or_else(|| BomError::SheetNotFound(SHEET_NAME.to_string()))
    }
}

/// Find the header row and the MPN column within it.
fn detect_layout(sheet: &Worksheet) -> Result<(u32, BomColumns), BomError> {
    let header_row = (1..=sheet.get_highest_row())
        .find(|&row| sheet.get_value((1, row)) == HEADER_MARKER)
        .ok_or_else(|| BomError::HeaderNotFound(HEADER_MARKER.to_string()))?;

    let mpn = (1..=sheet.get_highest_column())
        .find(|&col| sheet.get_value((col, header_row)) == MPN_LABEL)
        .ok_or_else(|| BomError::MpnColumnNotFound {
            row: header_row,
            label: MPN_LABEL.to_string(),
        })?;

    Ok((
        header_row,
        BomColumns {
            value: VALUE_COLUMN,
            footprint: FOOTPRINT_COLUMN,
            mpn,
        },
    ))
}
