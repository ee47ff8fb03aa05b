//! Spreadsheet input: file reading and entry extraction

pub mod extract;
pub mod reader;

pub use extract::{extract, normalize_header, HeaderIndex, ADDRESS_KEY, POST_CODE_KEY};
pub use reader::read_table;
