//! Order entity and its assignment state.
//!
//! ## Assignment State
//!
//! An order's relationship to a flight is an explicit two-state sum type,
//! [`Assignment`]: either the order is still `Unassigned`, or it is
//! `AssignedTo` exactly one flight key. There is no third state and no way
//! back — [`Order::assign_to`] binds at most once and refuses rebinding.
//!
//! ## Origin
//!
//! Every order in the current operation ships out of the same hub, so the
//! wire format omits the origin and the loader fills in
//! [`DEFAULT_ORIGIN`]. The field is still stored per order: eligibility is
//! always checked against the order's own origin, never against the
//! constant.

use crate::types::FlightKey;

/// Fixed hub every order ships from unless stated otherwise.
pub const DEFAULT_ORIGIN: &str = "YUL";

// ============================================================================
// Assignment enum
// ============================================================================

/// Terminal assignment state of an order.
///
/// `Unassigned` doubles as both the initial state and the unfulfilled
/// terminal state: an order that finished the assignment pass without a
/// match simply stays `Unassigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Assignment {
    /// No flight bound (initial state, or unfulfilled after the pass)
    #[default]
    Unassigned,
    /// Bound to the flight stored under this catalog key
    AssignedTo(FlightKey),
}

impl Assignment {
    /// Check whether a flight is bound.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(self, Assignment::AssignedTo(_))
    }

    /// Get the bound flight key, if any.
    #[inline]
    pub fn flight_key(&self) -> Option<FlightKey> {
        match self {
            Assignment::Unassigned => None,
            Assignment::AssignedTo(key) => Some(*key),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A shipping order awaiting assignment to a flight.
///
/// ## Example
///
/// ```
/// use speedyair::types::{Order, DEFAULT_ORIGIN};
///
/// let order = Order::new("ORD-001", "YYZ");
///
/// assert_eq!(order.origin, DEFAULT_ORIGIN);
/// assert!(!order.is_assigned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (the key from the order document)
    pub id: String,

    /// Departure location code
    pub origin: String,

    /// Requested arrival location code
    pub destination: String,

    /// Current assignment state; written at most once
    assignment: Assignment,
}

impl Order {
    /// Create a new unassigned order shipping from [`DEFAULT_ORIGIN`].
    pub fn new(id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::with_origin(id, DEFAULT_ORIGIN, destination)
    }

    /// Create a new unassigned order with an explicit origin.
    pub fn with_origin(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            assignment: Assignment::Unassigned,
        }
    }

    /// Get the current assignment state.
    #[inline]
    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    /// Check whether this order has been bound to a flight.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assignment.is_assigned()
    }

    /// Get the bound flight key, if any.
    #[inline]
    pub fn assigned_flight(&self) -> Option<FlightKey> {
        self.assignment.flight_key()
    }

    /// Bind this order to a flight.
    ///
    /// The binding is write-once: a second call is a no-op that returns
    /// `false` and leaves the original binding in place.
    ///
    /// # Example
    ///
    /// ```
    /// use speedyair::types::Order;
    ///
    /// let mut order = Order::new("ORD-001", "YYZ");
    /// assert!(order.assign_to(7));
    /// assert!(!order.assign_to(9));
    /// assert_eq!(order.assigned_flight(), Some(7));
    /// ```
    pub fn assign_to(&mut self, key: FlightKey) -> bool {
        if self.assignment.is_assigned() {
            return false;
        }
        self.assignment = Assignment::AssignedTo(key);
        true
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_default_is_unassigned() {
        assert_eq!(Assignment::default(), Assignment::Unassigned);
        assert!(!Assignment::default().is_assigned());
        assert!(Assignment::default().flight_key().is_none());
    }

    #[test]
    fn test_assignment_flight_key() {
        let assignment = Assignment::AssignedTo(42);
        assert!(assignment.is_assigned());
        assert_eq!(assignment.flight_key(), Some(42));
    }

    #[test]
    fn test_order_new_uses_default_origin() {
        let order = Order::new("ORD-001", "YYZ");

        assert_eq!(order.id, "ORD-001");
        assert_eq!(order.origin, DEFAULT_ORIGIN);
        assert_eq!(order.destination, "YYZ");
        assert_eq!(order.assignment(), Assignment::Unassigned);
    }

    #[test]
    fn test_order_with_origin() {
        let order = Order::with_origin("ORD-002", "YVR", "YYC");
        assert_eq!(order.origin, "YVR");
    }

    #[test]
    fn test_order_assign_once() {
        let mut order = Order::new("ORD-001", "YYZ");

        assert!(order.assign_to(3));
        assert!(order.is_assigned());
        assert_eq!(order.assigned_flight(), Some(3));
        assert_eq!(order.assignment(), Assignment::AssignedTo(3));
    }

    #[test]
    fn test_order_assign_refuses_rebind() {
        let mut order = Order::new("ORD-001", "YYZ");

        assert!(order.assign_to(3));
        assert!(!order.assign_to(5));

        // Original binding survives the refused rebind
        assert_eq!(order.assigned_flight(), Some(3));
    }
}
