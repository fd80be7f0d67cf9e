//! Flight catalog implementation.
//!
//! ## Architecture
//!
//! The catalog combines three views of the same flights:
//!
//! - **Slab**: Pre-allocated storage, integer keys, O(1) lookup
//! - **Sequence**: Insertion order of keys, the order `iter` walks
//! - **HashMap**: Flight ID to key mapping for O(1) lookup by ID
//!
//! ## Ordering
//!
//! Flights are never removed or reordered after load, so the `sequence`
//! vector is the schedule-document order for the life of the catalog. That
//! order is a contract: the assignment engine walks it when scanning
//! candidates, which is what makes day ties resolve to the earlier catalog
//! entry. Slab iteration order is left as a storage detail.
//!
//! ## Mutation
//!
//! The only post-load mutation is [`FlightCatalog::board`], which forwards
//! to the flight's own capacity-guarded counter. During an assignment pass
//! the engine holds the sole `&mut` handle to the catalog, so load reads
//! and increments cannot interleave with anything else.
//!
//! ## Example
//!
//! ```
//! use speedyair::schedule::FlightCatalog;
//! use speedyair::types::Flight;
//!
//! let mut catalog = FlightCatalog::new();
//!
//! let key = catalog.insert(Flight::new("F1", "YUL", "YYZ", 1));
//! catalog.insert(Flight::new("F2", "YUL", "YVR", 2));
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.key_of("F1"), Some(key));
//! assert_eq!(catalog.board(key), Some(1));
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::types::{Flight, FlightKey};

/// Ordered collection of flights with capacity-guarded load counters.
#[derive(Debug, Default)]
pub struct FlightCatalog {
    /// Pre-allocated flight storage
    flights: Slab<Flight>,

    /// Keys in schedule-document order; drives iteration and tie-breaks
    sequence: Vec<FlightKey>,

    /// Flight ID to slab key mapping
    id_index: HashMap<String, FlightKey>,
}

impl FlightCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            flights: Slab::new(),
            sequence: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// Create a catalog with pre-allocated capacity.
    pub fn with_capacity(flight_capacity: usize) -> Self {
        Self {
            flights: Slab::with_capacity(flight_capacity),
            sequence: Vec::with_capacity(flight_capacity),
            id_index: HashMap::with_capacity(flight_capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current storage capacity (pre-allocated slots).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.flights.capacity()
    }

    /// Get the number of flights in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    // ========================================================================
    // Flight Management
    // ========================================================================

    /// Add a flight to the catalog.
    ///
    /// The flight is appended at the end of the catalog sequence; nothing
    /// ever removes or reorders entries afterwards.
    ///
    /// # Returns
    ///
    /// The storage key for the added flight.
    pub fn insert(&mut self, flight: Flight) -> FlightKey {
        let id = flight.id.clone();
        let key = self.flights.insert(flight);
        self.sequence.push(key);
        self.id_index.insert(id, key);
        key
    }

    /// Get a reference to a flight by key.
    #[inline]
    pub fn get(&self, key: FlightKey) -> Option<&Flight> {
        self.flights.get(key)
    }

    /// Get a mutable reference to a flight by key.
    #[inline]
    pub fn get_mut(&mut self, key: FlightKey) -> Option<&mut Flight> {
        self.flights.get_mut(key)
    }

    /// Get the storage key for a flight ID.
    #[inline]
    pub fn key_of(&self, flight_id: &str) -> Option<FlightKey> {
        self.id_index.get(flight_id).copied()
    }

    /// Get a reference to a flight by its ID.
    pub fn get_by_id(&self, flight_id: &str) -> Option<&Flight> {
        self.key_of(flight_id).and_then(|key| self.get(key))
    }

    /// Check if a flight ID exists in the catalog.
    #[inline]
    pub fn contains(&self, flight_id: &str) -> bool {
        self.id_index.contains_key(flight_id)
    }

    /// Iterate over flights in catalog (schedule-document) order.
    pub fn iter(&self) -> impl Iterator<Item = (FlightKey, &Flight)> {
        self.sequence.iter().map(|&key| (key, &self.flights[key]))
    }

    // ========================================================================
    // Load Mutation
    // ========================================================================

    /// Board one order onto the flight stored under `key`.
    ///
    /// # Returns
    ///
    /// The flight's new load, or `None` if the key is vacant or the flight
    /// is already full. The catalog is untouched on refusal.
    pub fn board(&mut self, key: FlightKey) -> Option<u32> {
        self.flights.get_mut(key)?.board()
    }

    /// Total load across all flights.
    pub fn total_load(&self) -> u64 {
        self.iter().map(|(_, flight)| u64::from(flight.load())).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
