//! Route URL construction

pub mod url;

pub use url::{build_map_url, WaypointSet, SHOP_ADDRESS};
