//! CSV serialization.

use crate::error::{ConvertError, ConvertResult};
use crate::types::Table;

/// Render the table as CSV: header row first, then each row in column order.
/// Absent cells become empty fields; quoting is handled by the writer.
pub fn to_csv(table: &Table) -> ConvertResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    wtr.into_inner()
        .map_err(|e| ConvertError::Io(e.into_error()))
}
