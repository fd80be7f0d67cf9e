//! Flight schedule parsing.
//!
//! ## Day Parsing
//!
//! The wire format carries `day` as a string. An entry whose day fails to
//! parse as an integer is dropped from the catalog entirely (never inserted
//! with a default) and recorded as a [`SkippedFlight`] diagnostic. All
//! other fields are taken as-is; location codes are not validated.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::loader::LoadError;
use crate::schedule::FlightCatalog;
use crate::types::Flight;

/// One flight entry as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    /// Scheduled day, string-encoded integer
    pub day: String,
    /// Arrival location code
    pub destination: String,
    /// Departure location code
    pub origin: String,
}

/// Diagnostic for a flight entry excluded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFlight {
    /// The entry's document key
    pub flight_id: String,
    /// The day value that failed to parse
    pub raw_day: String,
}

impl fmt::Display for SkippedFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad day format for flight {}: {:?}",
            self.flight_id, self.raw_day
        )
    }
}

/// Result of parsing a flight schedule: the catalog plus the entries that
/// had to be skipped.
#[derive(Debug)]
pub struct LoadedFlights {
    /// Flights in document order
    pub catalog: FlightCatalog,
    /// Entries excluded because their day failed integer parsing
    pub skipped: Vec<SkippedFlight>,
}

/// Parse a flight schedule document.
///
/// Document order becomes catalog order. A malformed document or an entry
/// missing a required field is fatal; a non-integer `day` only skips that
/// entry.
///
/// # Example
///
/// ```
/// use speedyair::loader::flights::parse_flight_schedule;
///
/// let json = r#"{
///     "F1": { "day": "1", "destination": "YYZ", "origin": "YUL" },
///     "F2": { "day": "soon", "destination": "YVR", "origin": "YUL" }
/// }"#;
///
/// let loaded = parse_flight_schedule(json).unwrap();
/// assert_eq!(loaded.catalog.len(), 1);
/// assert_eq!(loaded.skipped.len(), 1);
/// assert_eq!(loaded.skipped[0].flight_id, "F2");
/// ```
pub fn parse_flight_schedule(json: &str) -> Result<LoadedFlights, LoadError> {
    let doc: serde_json::Map<String, Value> = serde_json::from_str(json)?;

    let mut catalog = FlightCatalog::with_capacity(doc.len());
    let mut skipped = Vec::new();

    for (flight_id, value) in doc {
        let record: FlightRecord =
            serde_json::from_value(value).map_err(|source| LoadError::Record {
                id: flight_id.clone(),
                source,
            })?;

        // Leading/trailing whitespace is tolerated, anything else is not
        match record.day.trim().parse::<i32>() {
            Ok(day) => {
                catalog.insert(Flight::new(flight_id, record.origin, record.destination, day));
            }
            Err(_) => skipped.push(SkippedFlight {
                flight_id,
                raw_day: record.day,
            }),
        }
    }

    Ok(LoadedFlights { catalog, skipped })
}

/// Read and parse a flight schedule file.
pub fn load_flight_schedule(path: impl AsRef<Path>) -> Result<LoadedFlights, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_flight_schedule(&json)
}

// ============================================================================
// Unit Tests
// ============================================================================
