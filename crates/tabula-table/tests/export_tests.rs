//! Integration tests for range calculation, grid conversion and export.

use tabula_table::{
    CellMarker, Column, ExportOptions, Exporter, JsonExporter, MajorDimension, SheetRange, Table,
    TableError, ValueRange, extract_table,
};

/// Helper to build a table of `columns` columns with `rows` values each
fn square_table(columns: usize, rows: usize) -> Table {
    Table::from_columns(
        (0..columns)
            .map(|c| Column::with_rows(format!("col{c}"), (0..rows).map(|r| format!("{c}:{r}"))))
            .collect(),
    )
}

/// Helper for the two-column fixture used by the conversion tests
fn xy_table() -> Table {
    Table::from_columns(vec![
        Column::with_rows("X", ["1", "2"]),
        Column::with_rows("Y", ["3", "4"]),
    ])
}

#[test]
fn test_range_with_headers() {
    let range = square_table(3, 5)
        .sheet_range("Sheet1", true)
        .expect("range");
    assert_eq!(range.to_string(), "Sheet1!A1:C6");
    assert_eq!(range.columns(), 3);
    assert_eq!(range.rows(), 6);
}

#[test]
fn test_range_without_headers() {
    let range = square_table(3, 5)
        .sheet_range("Sheet1", false)
        .expect("range");
    assert_eq!(range.to_string(), "Sheet1!A1:C5");
}

#[test]
fn test_range_beyond_twenty_six_columns() {
    let range = square_table(28, 1)
        .sheet_range("wide", true)
        .expect("range");
    assert_eq!(range.to_string(), "wide!A1:AB2");
}

#[test]
fn test_range_rejects_empty_table() {
    assert!(matches!(
        Table::new().sheet_range("Sheet1", true),
        Err(TableError::NoColumns)
    ));
}

#[test]
fn test_range_rejects_empty_first_column() {
    let table = Table::from_columns(vec![Column::new("Empty")]);
    match table.sheet_range("Sheet1", true) {
        Err(TableError::NoRows { column }) => assert_eq!(column, "Empty"),
        other => panic!("Expected NoRows, got {other:?}"),
    }
}

#[test]
fn test_sheet_range_parts() {
    let range = SheetRange::new("Data", 702, 10);
    assert_eq!(range.sheet(), "Data");
    assert_eq!(range.bottom_right(), "ZZ10");
    assert_eq!(range.to_string(), "Data!A1:ZZ10");
}

#[test]
fn test_grid_with_headers() {
    assert_eq!(
        xy_table().to_value_grid(true),
        vec![vec!["X", "1", "2"], vec!["Y", "3", "4"]]
    );
}

#[test]
fn test_grid_without_headers() {
    assert_eq!(
        xy_table().to_value_grid(false),
        vec![vec!["1", "2"], vec!["3", "4"]]
    );
}

#[test]
fn test_grid_of_empty_table() {
    assert!(Table::new().to_value_grid(true).is_empty());
}

#[test]
fn test_value_range_from_table() {
    let payload = ValueRange::from_table(&xy_table(), &ExportOptions::default()).expect("payload");
    assert_eq!(payload.range, "test_table!A1:B3");
    assert_eq!(payload.major_dimension, MajorDimension::Columns);
    assert_eq!(payload.values, xy_table().to_value_grid(true));
}

#[test]
fn test_json_exporter_compact() {
    let options = ExportOptions {
        sheet: "Sheet1".to_string(),
        include_headers: true,
    };
    let payload = ValueRange::from_table(&xy_table(), &options).expect("payload");
    let mut exporter = JsonExporter::new(Vec::new());
    exporter.export(&payload).expect("export");
    let written = String::from_utf8(exporter.into_inner()).expect("utf-8");
    assert_eq!(
        written,
        "{\"range\":\"Sheet1!A1:B3\",\"majorDimension\":\"COLUMNS\",\"values\":[[\"X\",\"1\",\"2\"],[\"Y\",\"3\",\"4\"]]}\n"
    );
}

#[test]
fn test_json_exporter_pretty() {
    let payload = ValueRange::from_table(&xy_table(), &ExportOptions::default()).expect("payload");
    let mut exporter = JsonExporter::new(Vec::new()).pretty(true);
    exporter.export(&payload).expect("export");
    let written = String::from_utf8(exporter.into_inner()).expect("utf-8");
    assert!(written.starts_with("{\n  \"range\": \"test_table!A1:B3\","));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_extract_to_payload() {
    let html = r#"<table>
<tr><th>Name</th><th>Code</th><th>Note</th></tr>
<tr><td class="confluenceTd">Alpha</td><td class="confluenceTd">1</td><td class="confluenceTd"><p>first</p><p>second</p></td></tr>
<tr><td class="confluenceTd">Beta</td><td class="confluenceTd">2</td><td class="confluenceTd"></td></tr>
</table>"#;
    let table = extract_table(html, &CellMarker::default())
        .into_table()
        .expect("table is valid");
    let payload = ValueRange::from_table(&table, &ExportOptions::default()).expect("payload");
    assert_eq!(payload.range, "test_table!A1:C3");
    assert_eq!(
        payload.values,
        vec![
            vec!["Name", "Alpha ", "Beta "],
            vec!["Code", "1 ", "2 "],
            vec!["Note", "first second ", ""],
        ]
    );
}
