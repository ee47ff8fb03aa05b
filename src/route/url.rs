//! Map URL builder - entries → Google Maps cycling directions URL

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashSet;
use url::Url;

use crate::error::RouteResult;
use crate::types::Entry;

/// Fixed origin and destination of every route.
pub const SHOP_ADDRESS: &str = "Share and Repair Shop, Bath, BA1 5LN";

const MAPS_DIR_BASE: &str = "https://www.google.com/maps/dir/?";

/// Escape set matching JavaScript's `encodeURIComponent`: everything but
/// alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded, spaces as `%20`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A set of waypoint strings that keeps first-encounter order.
///
/// Duplicate inserts are ignored and never reorder existing members, so the
/// route visits each unique stop once, in the order it first appeared.
#[derive(Debug, Default)]
pub struct WaypointSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl WaypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a waypoint; returns false if it was already present.
    pub fn insert(&mut self, waypoint: String) -> bool {
        if self.seen.contains(&waypoint) {
            return false;
        }
        self.seen.insert(waypoint.clone());
        self.items.push(waypoint);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Build a Google Maps directions URL through the entries' stops.
///
/// Query parameters appear in fixed order: `api=1`, `origin`, `destination`,
/// `travelmode=bicycling`, then a single `waypoints` parameter holding the
/// deduplicated `address, postCode` stops joined with a literal `|`. An empty
/// entry list still produces a trailing `waypoints=`.
pub fn build_map_url(origin: &str, destination: &str, entries: &[Entry]) -> RouteResult<String> {
    let params = [
        ("api", "1"),
        ("origin", origin),
        ("destination", destination),
        ("travelmode", "bicycling"),
    ];

    let mut waypoints = WaypointSet::new();
    for entry in entries {
        waypoints.insert(entry.waypoint());
    }

    let mut parts: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect();
    parts.push(format!(
        "waypoints={}",
        waypoints.iter().map(encode).collect::<Vec<_>>().join("|")
    ));

    let url = format!("{}{}", MAPS_DIR_BASE, parts.join("&"));
    Url::parse(&url)?;
    Ok(url)
}
