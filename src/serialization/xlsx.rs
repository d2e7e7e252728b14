//! XLSX serialization.

use rust_xlsxwriter::Workbook;

use crate::error::ConvertResult;
use crate::types::Table;

/// Render the table as a single-sheet workbook: header row, then data rows,
/// all cells written as strings, no styling. Absent cells are left blank.
pub fn to_xlsx(table: &Table) -> ConvertResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string(0, col as u16, name)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if let Some(text) = cell {
                sheet.write_string(row_idx as u32 + 1, col as u16, text)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
