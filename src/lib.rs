//! # SpeedyAir
//!
//! Deterministic air-cargo order assignment over a fixed flight schedule.
//!
//! ## Architecture
//!
//! The batch flow is load → assign → report, built from:
//! - **Types**: Core data structures (Flight, Order, Assignment, summary)
//! - **Schedule**: Flight catalog and order queue collections
//! - **Engine**: Greedy earliest-day assignment with capacity enforcement
//! - **Loader**: JSON input parsing with per-entry skip diagnostics
//! - **Report**: Schedule and itinerary line rendering
//!
//! ## Design Principles
//!
//! 1. **Determinism**: A fixed schedule and order list always produce the
//!    same bindings; day ties resolve by catalog order
//! 2. **First-Come-First-Served**: Queue order is processing priority;
//!    earlier orders consume capacity first, with no backtracking
//! 3. **Guarded Mutation**: A flight's load can only grow through its own
//!    capacity check, so `load <= max_capacity` holds everywhere
//! 4. **Synchronous Execution**: One sequential pass, no suspension points
//!
//! ## Example
//!
//! ```
//! use speedyair::engine::AssignmentEngine;
//! use speedyair::loader::{flights, orders};
//!
//! let schedule = r#"{
//!     "F1": { "day": "2", "destination": "YYZ", "origin": "YUL" },
//!     "F2": { "day": "1", "destination": "YYZ", "origin": "YUL" }
//! }"#;
//! let order_list = r#"{
//!     "ORD-001": { "destination": "YYZ" }
//! }"#;
//!
//! let mut loaded = flights::parse_flight_schedule(schedule).unwrap();
//! let mut queue = orders::parse_order_schedule(order_list).unwrap();
//!
//! let summary = AssignmentEngine::new().assign_all(&mut loaded.catalog, &mut queue);
//!
//! assert_eq!(summary.orders_assigned, 1);
//! // Day 1 beats day 2 even though F1 comes first in the document
//! let key = queue.get(0).unwrap().assigned_flight().unwrap();
//! assert_eq!(loaded.catalog.get(key).unwrap().id, "F2");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Flight, Order, Assignment, AssignmentSummary
pub mod types;

/// Schedule collections: flight catalog and order queue
pub mod schedule;

/// Assignment engine: deterministic greedy matching
pub mod engine;

/// Input loaders: JSON parsing with skip diagnostics
pub mod loader;

/// Reporting: schedule and itinerary lines
pub mod report;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::AssignmentEngine;
pub use loader::{LoadError, LoadedFlights, SkippedFlight};
pub use schedule::{FlightCatalog, OrderQueue};
pub use types::{
    Assignment, AssignmentSummary, Flight, FlightKey, Order, DEFAULT_ORIGIN,
    MAX_FLIGHT_CAPACITY,
};
