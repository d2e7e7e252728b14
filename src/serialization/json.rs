//! JSON serialization.

use serde_json::{Map, Value};

use crate::error::ConvertResult;
use crate::types::Table;

/// Render the table as a JSON array of objects, one per row. Keys are column
/// names in column order (relies on serde_json's `preserve_order` feature);
/// absent cells serialize as explicit `null`. Non-ASCII text passes through
/// unescaped.
pub fn to_json(table: &Table) -> ConvertResult<Vec<u8>> {
    let mut records: Vec<Value> = Vec::with_capacity(table.row_count());
    for row in &table.rows {
        let mut obj = Map::with_capacity(table.column_count());
        for (column, cell) in table.columns.iter().zip(row.iter()) {
            let value = match cell {
                Some(text) => Value::String(text.clone()),
                None => Value::Null,
            };
            obj.insert(column.clone(), value);
        }
        records.push(Value::Object(obj));
    }

    Ok(serde_json::to_vec(&Value::Array(records))?)
}
