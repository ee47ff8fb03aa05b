//! Tabular source read - CSV and XLSX files → rows of cell values

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::path::Path;

use crate::error::{RouteError, RouteResult};
use crate::types::CellValue;

/// Read a spreadsheet file into rows of cells. Row 0 is the header row.
///
/// The format is chosen by file extension: `.csv`, or `.xlsx`/`.xlsm` via
/// the first worksheet of the workbook.
pub fn read_table(path: &Path) -> RouteResult<Vec<Vec<CellValue>>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" => read_xlsx(path),
        other => Err(RouteError::Sheet(format!(
            "unsupported file type '{other}' for {} (expected .csv or .xlsx)",
            path.display()
        ))),
    }
}

fn read_csv(path: &Path) -> RouteResult<Vec<Vec<CellValue>>> {
    // Headers are row 0 of the table, not csv-crate headers
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut table = Vec::new();
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(parse_csv_cell).collect());
    }
    Ok(table)
}

/// Interpret a CSV field the way a spreadsheet would: numbers and booleans
/// become typed cells, the empty field becomes an empty cell.
fn parse_csv_cell(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(n) = field.trim().parse::<f64>() {
        return CellValue::Number(n);
    }
    if field.eq_ignore_ascii_case("true") {
        return CellValue::Boolean(true);
    }
    if field.eq_ignore_ascii_case("false") {
        return CellValue::Boolean(false);
    }
    CellValue::Text(field.to_string())
}

fn read_xlsx(path: &Path) -> RouteResult<Vec<Vec<CellValue>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| RouteError::Sheet(format!("failed to open Excel file: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RouteError::Sheet("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| RouteError::Sheet(format!("failed to read sheet '{sheet_name}': {e}")))?;

    let table = range
        .rows()
        .map(|row| row.iter().map(convert_excel_cell).collect())
        .collect();
    Ok(table)
}

fn convert_excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
