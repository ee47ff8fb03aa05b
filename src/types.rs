use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell.
///
/// Truthiness follows the source platform's rules: empty text, numeric zero,
/// `false`, and empty cells are falsy; everything else is truthy. Required
/// fields are checked with [`CellValue::is_truthy`], so a numeric postal code
/// of 0 excludes its row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Empty,
}

impl CellValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Boolean(b) => *b,
            CellValue::Empty => false,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "Text",
            CellValue::Number(_) => "Number",
            CellValue::Boolean(_) => "Boolean",
            CellValue::Empty => "Empty",
        }
    }
}

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Boolean(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

//==============================================================================
// Entries
//==============================================================================

/// One delivery/collection stop, extracted from a single data row.
///
/// `address` and `post_code` are the schema fields every flow depends on;
/// all other columns land in `extras` under their normalized header key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub address: String,
    pub post_code: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, CellValue>,
}

impl Entry {
    /// The stop string used in the route URL: `address, postCode`.
    pub fn waypoint(&self) -> String {
        format!("{}, {}", self.address, self.post_code)
    }
}

//==============================================================================
// Row selection
//==============================================================================

/// An inclusive range of data rows, 0-based and header-relative.
///
/// The CLI accepts 1-based data-row numbers (`3` or `2:5`) and subtracts 1;
/// `start > end` is a valid empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A selection covering every data row.
    pub fn all() -> Self {
        Self {
            start: 0,
            end: usize::MAX,
        }
    }

    pub fn contains(&self, data_row: usize) -> bool {
        data_row >= self.start && data_row <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl FromStr for Selection {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_row = |part: &str| -> Result<usize, RouteError> {
            let n: usize = part.trim().parse().map_err(|_| {
                RouteError::Selection(format!("'{part}' is not a row number"))
            })?;
            if n == 0 {
                return Err(RouteError::Selection(
                    "row numbers start at 1 (the first data row)".to_string(),
                ));
            }
            Ok(n - 1)
        };

        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(parse_row(start)?, parse_row(end)?)),
            None => {
                let row = parse_row(s)?;
                Ok(Self::new(row, row))
            }
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty)")
        } else if self.end == usize::MAX {
            write!(f, "all rows")
        } else {
            write!(f, "rows {}:{}", self.start + 1, self.end + 1)
        }
    }
}

//==============================================================================
// Extraction outcome
//==============================================================================

/// Why a selected row was left out of the extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingAddress,
    MissingPostCode,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAddress => write!(f, "missing address"),
            SkipReason::MissingPostCode => write!(f, "missing post code"),
        }
    }
}

/// A selected row that was excluded, with its 0-based data-row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// The outcome of extracting entries from a table.
///
/// The exclusion rules themselves are silent (a skipped row never fails the
/// run), but the record here makes them observable to verbose output and
/// tests.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Included entries, in table row order.
    pub entries: Vec<Entry>,
    /// Selected rows excluded for missing required fields.
    pub skipped: Vec<SkippedRow>,
    /// Normalized header keys that appeared more than once; the later
    /// column won each time.
    pub duplicate_headers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truthiness() {
        assert!(CellValue::Text("12 High St".to_string()).is_truthy());
        assert!(CellValue::Text("0".to_string()).is_truthy());
        assert!(CellValue::Number(7.0).is_truthy());
        assert!(CellValue::Boolean(true).is_truthy());

        assert!(!CellValue::Text(String::new()).is_truthy());
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(!CellValue::Boolean(false).is_truthy());
        assert!(!CellValue::Empty.is_truthy());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Text("BA1 1AA".to_string()).to_string(), "BA1 1AA");
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Boolean(true).to_string(), "true");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_selection_parse_single_row() {
        let sel: Selection = "3".parse().unwrap();
        assert_eq!(sel, Selection::new(2, 2));
    }

    #[test]
    fn test_selection_parse_range() {
        let sel: Selection = "2:5".parse().unwrap();
        assert_eq!(sel, Selection::new(1, 4));
    }

    #[test]
    fn test_selection_rejects_row_zero() {
        assert!("0".parse::<Selection>().is_err());
        assert!("0:3".parse::<Selection>().is_err());
    }

    #[test]
    fn test_selection_rejects_garbage() {
        assert!("abc".parse::<Selection>().is_err());
        assert!("2:xyz".parse::<Selection>().is_err());
    }

    #[test]
    fn test_inverted_selection_is_empty() {
        let sel: Selection = "5:2".parse().unwrap();
        assert!(sel.is_empty());
        assert!(!sel.contains(2));
    }

    #[test]
    fn test_selection_contains_is_inclusive() {
        let sel = Selection::new(1, 3);
        assert!(!sel.contains(0));
        assert!(sel.contains(1));
        assert!(sel.contains(3));
        assert!(!sel.contains(4));
    }

    #[test]
    fn test_waypoint_join() {
        let entry = Entry {
            address: "12 High St".to_string(),
            post_code: "BA1 1AA".to_string(),
            extras: BTreeMap::new(),
        };
        assert_eq!(entry.waypoint(), "12 High St, BA1 1AA");
    }
}
