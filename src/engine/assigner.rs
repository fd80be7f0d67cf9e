//! Greedy earliest-day assignment.
//!
//! ## Algorithm
//!
//! For one order, the engine scans the whole catalog in sequence order and
//! keeps the eligible flight with the lowest day. Eligibility is:
//!
//! - flight origin equals the order's origin
//! - flight destination equals the order's destination
//! - the flight still has capacity
//!
//! The scan uses a strict `<` comparison, so when several eligible flights
//! share the minimum day the earliest catalog entry wins. That tie-break is
//! an assumption carried from the schedule-document order, not a stated
//! business rule; it is kept because it makes the pass deterministic for a
//! fixed input.
//!
//! ## Batch Semantics
//!
//! [`AssignmentEngine::assign_all`] processes orders strictly in queue
//! order. An earlier order consumes capacity before a later order is even
//! looked at, so the allocation is first-come-first-served. There is no
//! backtracking and no rollback: once a flight boards an order the load
//! increment is committed, even if a later order goes unfulfilled because
//! of it.

use crate::schedule::{FlightCatalog, OrderQueue};
use crate::types::{Assignment, AssignmentSummary, FlightKey, Order};

/// Deterministic greedy order-to-flight assignment engine.
///
/// The engine owns no flight or order state; it operates on `&mut` handles
/// to the catalog and queue for the duration of a pass, which makes it the
/// only writer while the pass runs.
///
/// ## Example
///
/// ```
/// use speedyair::engine::AssignmentEngine;
/// use speedyair::schedule::{FlightCatalog, OrderQueue};
/// use speedyair::types::{Flight, Order};
///
/// let mut catalog = FlightCatalog::new();
/// catalog.insert(Flight::new("F1", "YUL", "YYZ", 2));
/// let early = catalog.insert(Flight::new("F2", "YUL", "YYZ", 1));
///
/// let mut queue = OrderQueue::new();
/// queue.push(Order::new("ORD-001", "YYZ"));
///
/// let mut engine = AssignmentEngine::new();
/// let summary = engine.assign_all(&mut catalog, &mut queue);
///
/// assert_eq!(summary.orders_assigned, 1);
/// assert_eq!(queue.get(0).unwrap().assigned_flight(), Some(early));
/// ```
#[derive(Debug, Default)]
pub struct AssignmentEngine;

impl AssignmentEngine {
    /// Create a new assignment engine.
    pub fn new() -> Self {
        Self
    }

    /// Assign one order to the best eligible flight.
    ///
    /// Among the flights matching the order's origin and destination with
    /// remaining capacity, the one with the minimum day is chosen; day ties
    /// go to the earlier catalog entry. On success the flight's load grows
    /// by exactly one and the order is bound to the flight's key.
    ///
    /// An order with no eligible flight stays `Unassigned` — that is a
    /// normal terminal state, not an error. An already-assigned order is
    /// returned as-is without touching the catalog.
    pub fn assign_order(
        &mut self,
        catalog: &mut FlightCatalog,
        order: &mut Order,
    ) -> Assignment {
        if order.is_assigned() {
            return order.assignment();
        }

        match self.find_best_flight(catalog, order) {
            Some(key) => {
                // Eligibility included remaining capacity, so the board
                // cannot be refused here; treat a refusal as no match
                // rather than corrupt the counters.
                if catalog.board(key).is_none() {
                    return Assignment::Unassigned;
                }
                order.assign_to(key);
                order.assignment()
            }
            None => Assignment::Unassigned,
        }
    }

    /// Run a full assignment pass over the queue.
    ///
    /// Orders are processed strictly in queue order: first-come orders get
    /// first pick of flight capacity.
    pub fn assign_all(
        &mut self,
        catalog: &mut FlightCatalog,
        queue: &mut OrderQueue,
    ) -> AssignmentSummary {
        let mut summary = AssignmentSummary::new();

        for order in queue.iter_mut() {
            match self.assign_order(catalog, order) {
                Assignment::AssignedTo(_) => summary.record_assigned(),
                Assignment::Unassigned => summary.record_unfulfilled(),
            }
        }

        summary
    }

    /// Scan the catalog for the earliest eligible flight.
    ///
    /// Strict `<` keeps the first catalog entry on day ties.
    fn find_best_flight(&self, catalog: &FlightCatalog, order: &Order) -> Option<FlightKey> {
        let mut best: Option<(FlightKey, i32)> = None;

        for (key, flight) in catalog.iter() {
            let eligible = flight.origin == order.origin
                && flight.destination == order.destination
                && flight.has_capacity();
            if !eligible {
                continue;
            }

            let earlier = match best {
                None => true,
                Some((_, best_day)) => flight.day < best_day,
            };
            if earlier {
                best = Some((key, flight.day));
            }
        }

        best.map(|(key, _)| key)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
