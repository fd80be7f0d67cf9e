//! Flight entity for the SpeedyAir assignment engine.
//!
//! ## Identity and Mutability
//!
//! A flight's identity fields (`id`, `origin`, `destination`, `day`) are set
//! at creation and never change. The only mutable state is the `load`
//! counter, which grows by exactly one per boarded order and can never pass
//! `max_capacity` — the counter is private and the only way to grow it is
//! [`Flight::board`], which refuses once the flight is full.
//!
//! ## Capacity
//!
//! Every flight in the current schedule carries the same fixed capacity,
//! [`MAX_FLIGHT_CAPACITY`]. The value is still stored per instance (set at
//! construction) so a schedule with varying capacities would only need a
//! different constructor call, not an engine change.

/// Storage key for a flight inside the catalog's slab.
///
/// Orders bind to flights through this key rather than through a direct
/// reference, mirroring how the catalog itself addresses its storage.
pub type FlightKey = usize;

/// Fixed seat/parcel capacity shared by every flight in the schedule.
pub const MAX_FLIGHT_CAPACITY: u32 = 20;

/// A scheduled cargo flight.
///
/// ## Example
///
/// ```
/// use speedyair::types::{Flight, MAX_FLIGHT_CAPACITY};
///
/// let mut flight = Flight::new("F1", "YUL", "YYZ", 1);
///
/// assert_eq!(flight.load(), 0);
/// assert_eq!(flight.max_capacity(), MAX_FLIGHT_CAPACITY);
/// assert!(flight.has_capacity());
///
/// flight.board();
/// assert_eq!(flight.load(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Unique flight identifier (the key from the schedule document)
    pub id: String,

    /// Departure location code, taken as-is from the schedule
    pub origin: String,

    /// Arrival location code, taken as-is from the schedule
    pub destination: String,

    /// Scheduled day. Any integer is a valid day, including zero and
    /// negative values.
    pub day: i32,

    /// Capacity fixed at construction, never mutated afterwards
    max_capacity: u32,

    /// Orders boarded so far. Invariant: `load <= max_capacity`.
    load: u32,
}

impl Flight {
    /// Create a new flight with zero load and the fixed schedule capacity.
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        day: i32,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            day,
            max_capacity: MAX_FLIGHT_CAPACITY,
            load: 0,
        }
    }

    /// Get the fixed capacity of this flight.
    #[inline]
    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Get the number of orders boarded so far.
    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Get the number of open slots left on this flight.
    #[inline]
    pub fn remaining_capacity(&self) -> u32 {
        self.max_capacity - self.load
    }

    /// Check whether this flight can still take another order.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.load < self.max_capacity
    }

    /// Check whether this flight is fully booked.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.load == self.max_capacity
    }

    /// Board one order onto this flight.
    ///
    /// # Returns
    ///
    /// The new load after boarding, or `None` if the flight was already
    /// full. The load counter is untouched on refusal.
    ///
    /// # Example
    ///
    /// ```
    /// use speedyair::types::Flight;
    ///
    /// let mut flight = Flight::new("F1", "YUL", "YYZ", 1);
    /// assert_eq!(flight.board(), Some(1));
    /// assert_eq!(flight.board(), Some(2));
    /// ```
    pub fn board(&mut self) -> Option<u32> {
        if self.has_capacity() {
            self.load += 1;
            Some(self.load)
        } else {
            None
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
