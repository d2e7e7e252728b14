use text_table_convert::inference::{Delimiter, Strategy, infer, infer_detailed};
use text_table_convert::types::RawSource;

fn source(text: &str) -> RawSource {
    RawSource::from_text(text)
}

fn cell(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn infers_comma_delimited_table() {
    let table = infer(&source("a,b,c\n1,2,3\n4,5,6\n"));

    assert_eq!(table.columns, vec!["a", "b", "c"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0], vec![cell("1"), cell("2"), cell("3")]);
    assert_eq!(table.rows[1], vec![cell("4"), cell("5"), cell("6")]);
}

#[test]
fn infers_semicolon_tab_and_pipe_delimiters() {
    let semi = infer_detailed(&source("a;b\n1;2\n"));
    assert_eq!(semi.strategy, Strategy::Delimited(Delimiter::Semicolon));
    assert_eq!(semi.table.columns, vec!["a", "b"]);

    let tab = infer_detailed(&source("a\tb\n1\t2\n"));
    assert_eq!(tab.strategy, Strategy::Delimited(Delimiter::Tab));
    assert_eq!(tab.table.cell(0, 1), Some("2"));

    let pipe = infer_detailed(&source("a|b\n1|2\n"));
    assert_eq!(pipe.strategy, Strategy::Delimited(Delimiter::Pipe));
    assert_eq!(pipe.table.cell(0, 0), Some("1"));
}

#[test]
fn comma_wins_over_later_candidates_when_both_present() {
    // Both ',' and ';' are in the sample; comma is tried first and yields two
    // columns, so the semicolon never gets a chance.
    let inference = infer_detailed(&source("a;b,c\n1;2,3\n"));

    assert_eq!(inference.strategy, Strategy::Delimited(Delimiter::Comma));
    assert_eq!(inference.table.columns, vec!["a;b", "c"]);
}

#[test]
fn rejected_comma_falls_through_to_semicolon() {
    // The only comma sits inside a quoted cell, so the comma parse sees a
    // single column and is rejected; the semicolon parse then succeeds.
    let inference = infer_detailed(&source("a;b\n\"1,5\";2\n"));

    assert_eq!(inference.strategy, Strategy::Delimited(Delimiter::Semicolon));
    assert_eq!(inference.table.columns, vec!["a", "b"]);
    assert_eq!(inference.table.cell(0, 0), Some("1,5"));
    assert_eq!(inference.table.cell(0, 1), Some("2"));
}

#[test]
fn quoted_comma_aside_falls_through_to_plain_text() {
    // Comma present in the sample, but the CSV parse yields one column, and
    // the lines are not key/value either.
    let inference = infer_detailed(&source("\"hello, world\"\nfoo\n"));

    assert_eq!(inference.strategy, Strategy::PlainText);
    assert_eq!(inference.table.columns, vec!["text"]);
}

#[test]
fn malformed_rows_are_skipped_and_counted() {
    let inference = infer_detailed(&source("a,b\n1,2\n1,2,3\n3,4\nlonely\n"));

    assert_eq!(inference.strategy, Strategy::Delimited(Delimiter::Comma));
    assert_eq!(inference.skipped_rows, 2);
    assert_eq!(inference.table.rows.len(), 2);
    assert_eq!(inference.table.rows[1], vec![cell("3"), cell("4")]);
}

#[test]
fn empty_delimited_fields_become_absent_cells() {
    let table = infer(&source("a,b,c\n1,,3\n"));

    assert_eq!(table.rows[0], vec![cell("1"), None, cell("3")]);
}

#[test]
fn duplicate_headers_are_deduplicated_in_order() {
    let table = infer(&source("a,a,b,a\n1,2,3,4\n"));

    assert_eq!(table.columns, vec!["a", "a.1", "b", "a.2"]);
    assert_eq!(table.rows[0], vec![cell("1"), cell("2"), cell("3"), cell("4")]);
}

#[test]
fn infers_key_value_record_with_colon() {
    let inference = infer_detailed(&source("name: Alice\nage: 30\n"));

    assert_eq!(inference.strategy, Strategy::KeyValue);
    assert_eq!(inference.table.columns, vec!["name", "age"]);
    assert_eq!(inference.table.row_count(), 1);
    assert_eq!(inference.table.cell(0, 0), Some("Alice"));
    assert_eq!(inference.table.cell(0, 1), Some("30"));
}

#[test]
fn infers_key_value_record_with_equals_and_mixed_separators() {
    let table = infer(&source("host=localhost\nport: 8080\n"));

    assert_eq!(table.columns, vec!["host", "port"]);
    assert_eq!(table.cell(0, 0), Some("localhost"));
    assert_eq!(table.cell(0, 1), Some("8080"));
}

#[test]
fn key_value_splits_on_first_colon_only() {
    let table = infer(&source("url: http://example.com\n"));

    assert_eq!(table.columns, vec!["url"]);
    assert_eq!(table.cell(0, 0), Some("http://example.com"));
}

#[test]
fn key_value_colon_takes_precedence_over_equals_on_same_line() {
    let table = infer(&source("a=b: c\n"));

    assert_eq!(table.columns, vec!["a=b"]);
    assert_eq!(table.cell(0, 0), Some("c"));
}

#[test]
fn repeated_key_overwrites_earlier_value() {
    let table = infer(&source("a: 1\nb: 2\na: 3\n"));

    assert_eq!(table.columns, vec!["a", "b"]);
    assert_eq!(table.cell(0, 0), Some("3"));
    assert_eq!(table.cell(0, 1), Some("2"));
}

#[test]
fn key_value_skips_blank_lines() {
    let inference = infer_detailed(&source("name: Alice\n\n\nage: 30\n"));

    assert_eq!(inference.strategy, Strategy::KeyValue);
    assert_eq!(inference.table.columns, vec!["name", "age"]);
}

#[test]
fn one_plain_line_aborts_key_value_entirely() {
    // The third line would match again, but the strategy stops at the first
    // non-matching line and the whole file falls through to plain text.
    let inference = infer_detailed(&source("a: 1\nplain line\nb: 2\n"));

    assert_eq!(inference.strategy, Strategy::PlainText);
    assert_eq!(inference.table.row_count(), 3);
}

#[test]
fn plain_text_fallback_keeps_non_empty_trimmed_lines_in_order() {
    let inference = infer_detailed(&source("hello world\n\n  foo bar  \n"));

    assert_eq!(inference.strategy, Strategy::PlainText);
    assert_eq!(inference.table.columns, vec!["text"]);
    assert_eq!(inference.table.cell(0, 0), Some("hello world"));
    assert_eq!(inference.table.cell(1, 0), Some("foo bar"));
    assert_eq!(inference.table.row_count(), 2);
}

#[test]
fn empty_input_yields_empty_plain_text_table() {
    let inference = infer_detailed(&source(""));

    assert_eq!(inference.strategy, Strategy::PlainText);
    assert_eq!(inference.table.columns, vec!["text"]);
    assert_eq!(inference.table.row_count(), 0);
}

#[test]
fn undecodable_bytes_are_replaced_not_fatal() {
    let raw = RawSource::from_bytes(b"a,b\n1,\xff\n");
    let table = infer(&raw);

    assert_eq!(table.columns, vec!["a", "b"]);
    assert_eq!(table.cell(0, 1), Some("\u{fffd}"));
}

#[test]
fn delimiter_probing_only_looks_at_first_twenty_non_empty_lines() {
    // No delimiter in the first 20 lines; the commas further down are never
    // probed, so the file lands in plain text.
    let mut text = String::new();
    for i in 0..20 {
        text.push_str(&format!("line {i}\n"));
    }
    text.push_str("a,b\n1,2\n");

    let inference = infer_detailed(&source(&text));
    assert_eq!(inference.strategy, Strategy::PlainText);
    assert_eq!(inference.table.row_count(), 22);
}
