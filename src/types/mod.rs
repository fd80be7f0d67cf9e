//! Core data types for SpeedyAir.
//!
//! ## Types
//!
//! - [`Flight`]: A scheduled cargo flight with a capacity-guarded load counter
//! - [`Order`]: A shipping order awaiting assignment
//! - [`Assignment`]: Explicit unassigned/assigned state of an order
//! - [`AssignmentSummary`]: Outcome counters for a completed pass
//!
//! ## Constants
//!
//! - [`MAX_FLIGHT_CAPACITY`]: Fixed capacity shared by every flight (20)
//! - [`DEFAULT_ORIGIN`]: The hub every order ships from (`"YUL"`)

mod flight;
mod order;
mod summary;

// Re-export all types at module level
pub use flight::{Flight, FlightKey, MAX_FLIGHT_CAPACITY};
pub use order::{Assignment, Order, DEFAULT_ORIGIN};
pub use summary::AssignmentSummary;
