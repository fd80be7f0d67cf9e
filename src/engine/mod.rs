//! Assignment engine module for SpeedyAir.
//!
//! ## Design Principles
//!
//! The assignment engine is designed for:
//!
//! 1. **Determinism**: Same schedule and same order list always produce the
//!    same bindings
//! 2. **Strict Queue Priority**: Orders are processed first-come-first-served
//! 3. **Greedy Selection**: Earliest eligible day wins; no backtracking once
//!    capacity is committed
//! 4. **Synchronous Execution**: One sequential pass, no suspension points
//!
//! ## Example
//!
//! ```
//! use speedyair::engine::AssignmentEngine;
//! use speedyair::schedule::{FlightCatalog, OrderQueue};
//! use speedyair::types::{Flight, Order};
//!
//! let mut catalog = FlightCatalog::new();
//! catalog.insert(Flight::new("F1", "YUL", "YYZ", 1));
//!
//! let mut queue = OrderQueue::new();
//! queue.push(Order::new("ORD-001", "YYZ"));
//!
//! let mut engine = AssignmentEngine::new();
//! let summary = engine.assign_all(&mut catalog, &mut queue);
//!
//! assert_eq!(summary.orders_assigned, 1);
//! ```

pub mod assigner;

pub use assigner::AssignmentEngine;
