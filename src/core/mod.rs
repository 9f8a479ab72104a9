//! Core utilities for the Club Log league exporter
//!
//! This module consolidates the plumbing shared by the command:
//! - `http`: HTTP client construction
//! - `export`: atomic CSV output

pub mod export;
pub mod http;

// Re-export commonly used items for convenience
pub use export::{write_csv, write_league};
pub use http::{build_client, REQUEST_TIMEOUT};
