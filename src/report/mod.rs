//! Human-readable schedule and itinerary rendering.
//!
//! Pure formatting over final state; nothing here performs I/O, so the
//! caller owns where the lines go.

use crate::schedule::{FlightCatalog, OrderQueue};
use crate::types::{Flight, Order};

/// Render one flight schedule line.
pub fn flight_line(flight: &Flight) -> String {
    format!(
        "Flight: {}, departure: {}, arrival: {}, day: {}",
        flight.id, flight.origin, flight.destination, flight.day
    )
}

/// Render the full flight schedule, one line per flight in catalog order.
pub fn schedule_lines(catalog: &FlightCatalog) -> Vec<String> {
    catalog.iter().map(|(_, flight)| flight_line(flight)).collect()
}

/// Render one itinerary line for an order.
///
/// Unfulfilled orders get an explicit `not scheduled` indicator rather
/// than being omitted.
pub fn order_line(order: &Order, catalog: &FlightCatalog) -> String {
    match order.assigned_flight().and_then(|key| catalog.get(key)) {
        Some(flight) => format!(
            "order: {}, flightNumber: {}, departure: {}, arrival: {}, day: {}",
            order.id, flight.id, flight.origin, flight.destination, flight.day
        ),
        None => format!("order: {}, flightNumber: not scheduled", order.id),
    }
}

/// Render the full itinerary, one line per order in queue order.
pub fn itinerary_lines(queue: &OrderQueue, catalog: &FlightCatalog) -> Vec<String> {
    queue
        .iter()
        .map(|order| order_line(order, catalog))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
