//! Order list parsing.
//!
//! Order entries carry only a destination on the wire; every order ships
//! from the fixed hub, so the loader fills in
//! [`DEFAULT_ORIGIN`](crate::types::DEFAULT_ORIGIN). Unlike flights, no
//! order entry can fail per-entry parsing — every field is a plain string —
//! so the queue always contains one order per document entry.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::loader::LoadError;
use crate::schedule::OrderQueue;
use crate::types::Order;

/// One order entry as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    /// Requested arrival location code
    pub destination: String,
}

/// Parse an order list document.
///
/// Document order becomes queue order, which is processing priority.
///
/// # Example
///
/// ```
/// use speedyair::loader::orders::parse_order_schedule;
/// use speedyair::types::DEFAULT_ORIGIN;
///
/// let json = r#"{
///     "ORD-001": { "destination": "YYZ" },
///     "ORD-002": { "destination": "YVR" }
/// }"#;
///
/// let queue = parse_order_schedule(json).unwrap();
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.get(0).unwrap().origin, DEFAULT_ORIGIN);
/// ```
pub fn parse_order_schedule(json: &str) -> Result<OrderQueue, LoadError> {
    let doc: serde_json::Map<String, Value> = serde_json::from_str(json)?;

    let mut queue = OrderQueue::with_capacity(doc.len());

    for (order_id, value) in doc {
        let record: OrderRecord =
            serde_json::from_value(value).map_err(|source| LoadError::Record {
                id: order_id.clone(),
                source,
            })?;
        queue.push(Order::new(order_id, record.destination));
    }

    Ok(queue)
}

/// Read and parse an order list file.
pub fn load_order_schedule(path: impl AsRef<Path>) -> Result<OrderQueue, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_order_schedule(&json)
}

// ============================================================================
// Unit Tests
// ============================================================================
