//! Integration tests for the table state machine.

use tabula_html::{Termination, Token};
use tabula_table::{
    CellMarker, Column, Extraction, MarkerMatch, ParseTermination, Table, TableError,
    TableParser, TruncationCause, extract_table,
};

/// Helper to extract with the default `class="confluenceTd"` marker
fn extract(html: &str) -> Extraction {
    extract_table(html, &CellMarker::default())
}

/// Helper to build a table body: one header row, then qualifying cells
fn table_html(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<html><body><table>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!(r#"<td class="confluenceTd">{cell}</td>"#));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table></body></html>");
    html
}

/// Helper to read a column's values as string slices
fn rows_of(table: &Table, index: usize) -> Vec<&str> {
    table.columns()[index]
        .rows
        .iter()
        .map(String::as_str)
        .collect()
}

#[test]
fn test_headers_and_rows_shape() {
    let html = table_html(
        &["Name", "Code", "Region"],
        &[&["a", "1", "x"], &["b", "2", "y"], &["c", "3", "z"], &["d", "4", "w"]],
    );
    let extraction = extract(&html);
    assert!(extraction.is_clean());
    assert!(extraction.issues.is_empty());

    let table = extraction.into_table().expect("table is valid");
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Name", "Code", "Region"]);
    for column in table.columns() {
        assert_eq!(column.row_count(), 4);
    }
    assert_eq!(rows_of(&table, 0), vec!["a ", "b ", "c ", "d "]);
    assert_eq!(rows_of(&table, 2), vec!["x ", "y ", "z ", "w "]);
}

#[test]
fn test_parsing_is_deterministic() {
    let html = table_html(&["A", "B"], &[&["1", "2"], &["3", "4"]]);
    assert_eq!(extract(&html), extract(&html));
}

#[test]
fn test_round_robin_wraps_to_first_column() {
    // Row boundaries are irrelevant: all cells sit in a single <tr>.
    let html = r#"<table><tr><th>A</th><th>B</th><th>C</th></tr>
<tr><td class="confluenceTd">1</td><td class="confluenceTd">2</td><td class="confluenceTd">3</td><td class="confluenceTd">4</td></tr></table>"#;
    let extraction = extract(html);
    let table = &extraction.table;
    assert_eq!(rows_of(table, 0), vec!["1 ", "4 "]);
    assert_eq!(rows_of(table, 1), vec!["2 "]);
    assert_eq!(rows_of(table, 2), vec!["3 "]);
}

#[test]
fn test_non_qualifying_cells_are_ignored() {
    let html = r#"<table><tr><th>A</th><th>B</th></tr>
<tr><td class="confluenceTd">1</td><td>skip <b>me</b></td><td class="other">nope</td><td class="confluenceTd">2</td></tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["1 "]);
    assert_eq!(rows_of(&table, 1), vec!["2 "]);
}

#[test]
fn test_multi_fragment_cell_text() {
    let html = r#"<table><tr><th>Word</th></tr><tr><td class="confluenceTd"><p>Alpha</p><p>Beta</p></td></tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["Alpha Beta "]);
}

#[test]
fn test_fragment_with_trailing_space_collapses() {
    let html = r#"<table><tr><th>Word</th></tr><tr><td class="confluenceTd"><b>Alpha </b>Beta</td></tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["Alpha Beta "]);
}

#[test]
fn test_empty_qualifying_cell_is_empty_string() {
    let html = r#"<table><tr><th>A</th><th>B</th></tr><tr><td class="confluenceTd"></td><td class="confluenceTd">x</td></tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec![""]);
    assert_eq!(rows_of(&table, 1), vec!["x "]);
}

#[test]
fn test_no_qualifying_cells_yields_no_columns() {
    let extraction = extract("<html><body><p>Nothing tabular here</p></body></html>");
    assert!(extraction.is_clean());
    assert!(extraction.table.is_empty());
    assert!(matches!(
        extraction.table.sheet_range("Sheet1", true),
        Err(TableError::NoColumns)
    ));
    assert!(matches!(extraction.into_table(), Err(TableError::NoColumns)));
}

#[test]
fn test_header_whitespace_is_kept_raw() {
    let html = "<table><tr><th>\n  Name</th></tr></table>";
    let extraction = extract(html);
    assert_eq!(extraction.table.columns()[0].name, "\n  Name");
}

#[test]
fn test_split_header_creates_one_column_per_fragment() {
    let html = "<table><tr><th>Full <i>name</i></th></tr></table>";
    let extraction = extract(html);
    let names: Vec<&str> = extraction
        .table
        .columns()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Full ", "name"]);
    assert_eq!(extraction.issues.len(), 1);
    assert!(extraction.issues[0].message.contains("header cell"));
}

#[test]
fn test_data_cell_before_headers_is_dropped() {
    let html = r#"<table><tr><td class="confluenceTd">orphan</td></tr><tr><th>A</th></tr><tr><td class="confluenceTd">1</td></tr></table>"#;
    let extraction = extract(html);
    assert_eq!(extraction.issues.len(), 1);
    assert!(extraction.issues[0].message.contains("before any header"));
    let table = extraction.into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["1 "]);
}

#[test]
fn test_unclosed_qualifying_cell_discards_text() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">lost<td class="confluenceTd">kept</td></tr></table>"#;
    let extraction = extract(html);
    assert_eq!(extraction.issues.len(), 1);
    assert_eq!(rows_of(&extraction.table, 0), vec!["kept "]);
}

#[test]
fn test_ragged_columns_fail_validation() {
    let html = table_html(&["A", "B"], &[&["1", "2"], &["3"]]);
    let extraction = extract(&html);
    assert!(extraction.is_clean());
    match extraction.into_table() {
        Err(TableError::RaggedColumns {
            column,
            expected,
            found,
        }) => {
            assert_eq!(column, "B");
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("Expected RaggedColumns, got {other:?}"),
    }
}

#[test]
fn test_truncated_tag_is_reported() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">1</td><td class="conf"#;
    let extraction = extract(html);
    assert_eq!(
        extraction.termination,
        ParseTermination::Truncated(TruncationCause::Tokenizer(Termination::EofInTag))
    );
    match extraction.into_table() {
        Err(TableError::Truncated { cause, partial }) => {
            assert_eq!(cause, TruncationCause::Tokenizer(Termination::EofInTag));
            assert_eq!(partial.columns()[0].rows, vec!["1 ".to_string()]);
        }
        other => panic!("Expected Truncated, got {other:?}"),
    }
}

#[test]
fn test_unclosed_cell_is_truncation() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">1"#;
    let extraction = extract(html);
    assert_eq!(
        extraction.termination,
        ParseTermination::Truncated(TruncationCause::UnclosedCell)
    );
    // The open cell never closed, so nothing reached the column.
    assert!(extraction.table.columns()[0].rows.is_empty());
}

#[test]
fn test_partial_table_can_be_accepted() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">1</td></tr><!-- cut"#;
    let extraction = extract(html);
    assert!(!extraction.is_clean());
    let table = extraction.into_partial_table().expect("partial table is valid");
    assert_eq!(table, Table::from_columns(vec![Column::with_rows("A", ["1 "])]));
}

#[test]
fn test_missing_end_of_file_is_truncation() {
    let tokens = vec![
        Token::StartTag {
            name: "th".to_string(),
            self_closing: false,
            attributes: Vec::new(),
            raw: "<th>".to_string(),
        },
        Token::Text {
            raw: "A".to_string(),
        },
        Token::EndTag {
            name: "th".to_string(),
        },
    ];
    let extraction = TableParser::new(tokens, CellMarker::default()).run();
    assert_eq!(extraction.table.column_count(), 1);
    assert_eq!(
        extraction.termination,
        ParseTermination::Truncated(TruncationCause::MissingEndOfFile)
    );
}

#[test]
fn test_attribute_marker_tolerates_markup_variations() {
    let html = r#"<table><tr><th>A</th><th>B</th><th>C</th></tr><tr>
<td data-x="1" class='confluenceTd'>single</td>
<td CLASS=confluenceTd>unquoted</td>
<td class="highlight confluenceTd">multi</td>
</tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["single "]);
    assert_eq!(rows_of(&table, 1), vec!["unquoted "]);
    assert_eq!(rows_of(&table, 2), vec!["multi "]);
}

#[test]
fn test_raw_marker_requires_literal_markup() {
    let html = r#"<table><tr><th>A</th></tr><tr>
<td class='confluenceTd'>single</td>
<td class="confluenceTd" colspan="1">literal</td>
</tr></table>"#;
    let marker = CellMarker::default().with_mode(MarkerMatch::RawMarkup);
    let table = extract_table(html, &marker)
        .into_table()
        .expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["literal "]);
}

#[test]
fn test_custom_marker() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">no</td><td data-role="value">yes</td></tr></table>"#;
    let marker = CellMarker::new("data-role", "value");
    let table = extract_table(html, &marker)
        .into_table()
        .expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["yes "]);
}

#[test]
fn test_marked_header_cell_adds_no_value() {
    let html = r#"<table><tr><th class="confluenceTd">A</th><th>B</th></tr>
<tr><td class="confluenceTd">1</td><td class="confluenceTd">2</td></tr></table>"#;
    let extraction = extract(html);
    assert!(extraction.issues.is_empty());
    let table = extraction.into_table().expect("table is valid");
    assert_eq!(table.columns()[0].name, "A");
    assert_eq!(rows_of(&table, 0), vec!["1 "]);
    assert_eq!(rows_of(&table, 1), vec!["2 "]);
}

#[test]
fn test_self_closing_cell_is_ignored() {
    let html = r#"<table><tr><th>A</th><th>B</th></tr>
<tr><td class="confluenceTd"/><td>skip</td><td class="confluenceTd">1</td><td class="confluenceTd">2</td></tr></table>"#;
    let extraction = extract(html);
    assert!(extraction.is_clean());
    assert!(extraction.issues.is_empty());
    let table = extraction.into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec!["1 "]);
    assert_eq!(rows_of(&table, 1), vec!["2 "]);
}

#[test]
fn test_script_text_in_cell_is_raw() {
    let html = r#"<table><tr><th>A</th></tr><tr><td class="confluenceTd">x<script>var s = "</td>";</script></td></tr></table>"#;
    let table = extract(html).into_table().expect("table is valid");
    assert_eq!(rows_of(&table, 0), vec![r#"x var s = "</td>"; "#]);
}
