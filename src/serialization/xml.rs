//! XML serialization.
//!
//! Output shape: an XML declaration, a `<rows>` root, one `<row>` element per
//! table row, and within each row one child element per column whose tag name
//! is the column name verbatim.
//!
//! Known limitation: column names are used as element names without
//! sanitization, so a column containing characters illegal in XML names (a
//! space, a digit prefix, ...) produces invalid XML. Callers that can't trust
//! their column names must sanitize them before serializing.

use crate::types::Table;

/// Render the table as XML. Cell text has `&`, `<` and `>` escaped; an absent
/// cell becomes an empty element.
pub fn to_xml(table: &Table) -> Vec<u8> {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<rows>");

    for row in &table.rows {
        out.push_str("<row>");
        for (column, cell) in table.columns.iter().zip(row.iter()) {
            out.push('<');
            out.push_str(column);
            out.push('>');
            if let Some(text) = cell {
                push_escaped(&mut out, text);
            }
            out.push_str("</");
            out.push_str(column);
            out.push('>');
        }
        out.push_str("</row>");
    }

    out.push_str("</rows>");
    out.into_bytes()
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
