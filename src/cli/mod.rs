//! CLI command handlers

pub mod commands;

pub use commands::{instructions, list, map, send};
