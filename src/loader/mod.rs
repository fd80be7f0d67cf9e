//! JSON loaders for the flight schedule and the order list.
//!
//! ## Wire Format
//!
//! Both documents are JSON objects keyed by entity ID, with string-valued
//! fields:
//!
//! ```json
//! { "F1": { "day": "1", "destination": "YYZ", "origin": "YUL" } }
//! { "ORD-001": { "destination": "YYZ" } }
//! ```
//!
//! Document order is significant: it becomes catalog order (and with it the
//! engine's day tie-break) and queue order (processing priority). The crate
//! enables `serde_json`'s `preserve_order` feature so object iteration
//! follows the file.
//!
//! ## Error Taxonomy
//!
//! - Unreadable file, malformed JSON, or an entry missing a required string
//!   field: fatal, surfaced as [`LoadError`] — the batch cannot proceed
//!   without both datasets.
//! - A flight whose `day` is not an integer: recoverable — the entry is
//!   excluded from the catalog and reported in
//!   [`LoadedFlights::skipped`](flights::LoadedFlights). Parsing never
//!   prints; the caller decides how to surface the diagnostics.
//! - Order entries cannot fail individually (every field is a plain
//!   string), so no order is ever dropped.

use std::path::PathBuf;

use thiserror::Error;

pub mod flights;
pub mod orders;

pub use flights::{LoadedFlights, SkippedFlight};

/// Fatal failure while loading an input document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not the expected JSON object shape
    #[error("malformed JSON document")]
    Json(#[from] serde_json::Error),

    /// An entry is missing a required string field
    #[error("invalid record {id}")]
    Record {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}
