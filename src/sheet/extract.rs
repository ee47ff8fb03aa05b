//! Entry extraction - selected spreadsheet rows → delivery entries

use std::collections::{BTreeMap, HashMap};

use crate::error::{RouteError, RouteResult};
use crate::types::{CellValue, Entry, Extraction, Selection, SkipReason, SkippedRow};

/// Normalized key of the required address column.
pub const ADDRESS_KEY: &str = "address";
/// Normalized key of the required postal code column.
pub const POST_CODE_KEY: &str = "postCode";

/// Convert a human-readable column header into a camelCase field key.
///
/// `-`, `_`, `/` and `,` are treated as spaces, the character at string
/// position 0 is lowercased, the first character of every later word is
/// uppercased, and all whitespace is stripped. `"Post Code"` → `postCode`,
/// `"House/Flat"` → `houseFlat`. Idempotent for keys already in camelCase.
pub fn normalize_header(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_is_word = false;
    let mut pos = 0usize;

    for c in label.chars() {
        let c = if matches!(c, '-' | '_' | '/' | ',') { ' ' } else { c };
        if c.is_whitespace() {
            prev_is_word = false;
            pos += 1;
            continue;
        }
        // Word characters are ASCII-only, as in the source platform's \w
        let is_word = c.is_ascii_alphanumeric();
        if is_word && pos == 0 {
            out.extend(c.to_lowercase());
        } else if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
        pos += 1;
    }

    out
}

/// Mapping from normalized header key to column position, built once per
/// extraction from row 0 of the table.
///
/// When two headers normalize to the same key the later column wins, without
/// error; the clash is recorded so callers can surface it.
#[derive(Debug)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
    /// Keys in first-seen column order.
    order: Vec<String>,
    duplicates: Vec<String>,
}

impl HeaderIndex {
    pub fn build(headers: &[CellValue]) -> Self {
        let mut columns = HashMap::new();
        let mut order = Vec::new();
        let mut duplicates = Vec::new();

        for (col, header) in headers.iter().enumerate() {
            let key = normalize_header(&header.to_string());
            if columns.insert(key.clone(), col).is_some() {
                duplicates.push(key);
            } else {
                order.push(key);
            }
        }

        Self {
            columns,
            order,
            duplicates,
        }
    }

    pub fn column(&self, key: &str) -> Option<usize> {
        self.columns.get(key).copied()
    }

    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Iterate keys with their winning column, in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |key| (key.as_str(), self.columns[key]))
    }
}

/// Extract delivery entries from a table of cell values.
///
/// Row 0 is the header row; data rows are indexed from 0 when matched
/// against `selection`. A row is included iff its index falls inside the
/// selection and both its address and post code cells are truthy. Output
/// preserves table row order.
pub fn extract(table: &[Vec<CellValue>], selection: Selection) -> RouteResult<Extraction> {
    let headers = table
        .first()
        .ok_or_else(|| RouteError::Sheet("table has no header row".to_string()))?;
    let index = HeaderIndex::build(headers);

    let mut extraction = Extraction {
        duplicate_headers: index.duplicates().to_vec(),
        ..Default::default()
    };

    for (row_index, row) in table.iter().enumerate().skip(1) {
        let data_row = row_index - 1;
        if !selection.contains(data_row) {
            continue;
        }

        let cell = |key: &str| -> CellValue {
            index
                .column(key)
                .and_then(|col| row.get(col))
                .cloned()
                .unwrap_or(CellValue::Empty)
        };

        let address = cell(ADDRESS_KEY);
        if !address.is_truthy() {
            extraction.skipped.push(SkippedRow {
                row: data_row,
                reason: SkipReason::MissingAddress,
            });
            continue;
        }

        let post_code = cell(POST_CODE_KEY);
        if !post_code.is_truthy() {
            extraction.skipped.push(SkippedRow {
                row: data_row,
                reason: SkipReason::MissingPostCode,
            });
            continue;
        }

        let mut extras = BTreeMap::new();
        for (key, col) in index.iter() {
            if key == ADDRESS_KEY || key == POST_CODE_KEY {
                continue;
            }
            let value = row.get(col).cloned().unwrap_or(CellValue::Empty);
            extras.insert(key.to_string(), value);
        }

        extraction.entries.push(Entry {
            address: address.to_string(),
            post_code: post_code.to_string(),
            extras,
        });
    }

    Ok(extraction)
}
