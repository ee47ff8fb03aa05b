//! Sheetroute - cycling delivery routes from spreadsheet rows
//!
//! This library reads delivery/collection entries from selected rows of a
//! spreadsheet file, builds a Google Maps cycling route URL through the
//! stops, and renders HTML delivery instructions.
//!
//! # Features
//!
//! - Header normalization into stable camelCase field keys
//! - Selection-range filtering with required-field checks
//! - Route URLs with deduplicated, insertion-ordered waypoints
//! - HTML instructions rendering and an outbox mail boundary
//!
//! # Example
//!
//! ```no_run
//! use sheetroute::route::{build_map_url, SHOP_ADDRESS};
//! use sheetroute::sheet::{extract, read_table};
//! use sheetroute::types::Selection;
//! use std::path::Path;
//!
//! let table = read_table(Path::new("deliveries.csv"))?;
//! let extraction = extract(&table, Selection::new(0, 4))?;
//!
//! let url = build_map_url(SHOP_ADDRESS, SHOP_ADDRESS, &extraction.entries)?;
//! println!("{url}");
//! # Ok::<(), sheetroute::error::RouteError>(())
//! ```

pub mod cli;
pub mod error;
pub mod render;
pub mod route;
pub mod sheet;
pub mod types;

// Re-export commonly used types
pub use error::{RouteError, RouteResult};
pub use types::{CellValue, Entry, Extraction, Selection};
