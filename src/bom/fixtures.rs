//! Workbook builders shared by tests.

use std::path::Path;

use umya_spreadsheet::Spreadsheet;

pub const HEADER: [&str; 7] = ["Row", "Ref", "Qty", "Value", "Description", "Footprint", "MPN"];

/// Build a workbook with a `BoM` sheet (title rows, `header`, then `rows`)
/// plus an unrelated `Notes` sheet. Empty strings leave the cell absent.
pub fn bom_spreadsheet(header: &[&str], rows: &[&[&str]]) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    let sheet = book.new_sheet("BoM").unwrap();
    sheet.get_cell_mut((1, 1)).set_value_string("Bill of Materials");
    sheet.get_cell_mut((1, 2)).set_value_string("Rev A");

    let grid = std::iter::once(header).chain(rows.iter().copied());
    for (r, cells) in grid.enumerate() {
        for (c, text) in cells.iter().enumerate() {
            if !text.is_empty() {
                sheet
                    .get_cell_mut((c as u32 + 1, r as u32 + 3))
                    .set_value_string(*text);
            }
        }
    }

    let notes = book.new_sheet("Notes").unwrap();
    notes.get_cell_mut((1, 1)).set_value_string("do not edit");

    book
}

pub fn write_bom(path: &Path, header: &[&str], rows: &[&[&str]]) {
    let book = bom_spreadsheet(header, rows);
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}
