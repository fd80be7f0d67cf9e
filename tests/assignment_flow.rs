//! End-to-end tests for the SpeedyAir assignment flow.
//!
//! These tests verify:
//! 1. The load → assign → report pipeline over real JSON documents
//! 2. Capacity is never exceeded, even under heavy synthetic load
//! 3. Determinism is preserved across runs
//! 4. The reporting output matches the documented line formats
//!
//! ## Running
//!
//! ```bash
//! cargo test --test assignment_flow
//! ```

use speedyair::engine::AssignmentEngine;
use speedyair::loader::flights::parse_flight_schedule;
use speedyair::loader::orders::parse_order_schedule;
use speedyair::report;
use speedyair::schedule::{FlightCatalog, OrderQueue};
use speedyair::types::{Flight, Order, MAX_FLIGHT_CAPACITY};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of synthetic orders for the stress run
const STRESS_ORDER_COUNT: usize = 5_000;

/// Destinations used by the synthetic schedule
const DESTINATIONS: [&str; 5] = ["YYZ", "YYC", "YVR", "YOW", "YHZ"];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Build a synthetic catalog: one flight per destination per day.
fn generate_catalog(days: i32) -> FlightCatalog {
    let mut catalog = FlightCatalog::with_capacity(DESTINATIONS.len() * days as usize);
    let mut number = 1;
    for day in 1..=days {
        for destination in DESTINATIONS {
            catalog.insert(Flight::new(format!("F{number}"), "YUL", destination, day));
            number += 1;
        }
    }
    catalog
}

/// Generate a deterministic order queue. Same seed = same orders.
///
/// Roughly one order in twenty asks for a destination no flight serves.
fn generate_orders(count: usize, seed: u64) -> OrderQueue {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut queue = OrderQueue::with_capacity(count);

    for i in 0..count {
        let destination = if rng.gen_bool(0.05) {
            "ZZZ"
        } else {
            DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())]
        };
        queue.push(Order::new(format!("ORD-{i:05}"), destination));
    }

    queue
}

/// Run a full pass and return each order's bound flight ID in queue order.
fn run_assignment(days: i32, order_count: usize, seed: u64) -> Vec<Option<String>> {
    let mut catalog = generate_catalog(days);
    let mut queue = generate_orders(order_count, seed);

    AssignmentEngine::new().assign_all(&mut catalog, &mut queue);

    queue
        .iter()
        .map(|order| {
            order
                .assigned_flight()
                .map(|key| catalog.get(key).unwrap().id.clone())
        })
        .collect()
}

// ============================================================================
// END-TO-END PIPELINE
// ============================================================================

#[test]
fn earliest_day_wins_end_to_end() {
    // Two flights to the same destination; the later one comes first in the
    // document. Both orders must land on the day-1 flight.
    let schedule = r#"{
        "F1": { "day": "2", "destination": "YYZ", "origin": "YUL" },
        "F2": { "day": "1", "destination": "YYZ", "origin": "YUL" }
    }"#;
    let order_list = r#"{
        "ORD-001": { "destination": "YYZ" },
        "ORD-002": { "destination": "YYZ" }
    }"#;

    let mut loaded = parse_flight_schedule(schedule).unwrap();
    let mut queue = parse_order_schedule(order_list).unwrap();

    let summary = AssignmentEngine::new().assign_all(&mut loaded.catalog, &mut queue);

    assert_eq!(summary.orders_assigned, 2);

    let f2 = loaded.catalog.key_of("F2").unwrap();
    assert_eq!(queue.get(0).unwrap().assigned_flight(), Some(f2));
    assert_eq!(queue.get(1).unwrap().assigned_flight(), Some(f2));

    assert_eq!(loaded.catalog.get_by_id("F2").unwrap().load(), 2);
    assert_eq!(loaded.catalog.get_by_id("F1").unwrap().load(), 0);
}

#[test]
fn unmatched_destination_reports_not_scheduled() {
    let schedule = r#"{
        "F1": { "day": "1", "destination": "YYZ", "origin": "YUL" }
    }"#;
    let order_list = r#"{
        "ORD-001": { "destination": "YXE" }
    }"#;

    let mut loaded = parse_flight_schedule(schedule).unwrap();
    let mut queue = parse_order_schedule(order_list).unwrap();

    let summary = AssignmentEngine::new().assign_all(&mut loaded.catalog, &mut queue);

    assert_eq!(summary.orders_unfulfilled, 1);
    assert_eq!(
        report::itinerary_lines(&queue, &loaded.catalog),
        vec!["order: ORD-001, flightNumber: not scheduled"]
    );
}

#[test]
fn skipped_flight_is_invisible_downstream() {
    // F2's day is unparseable: it must not appear in the schedule report
    // and must never take an order, while the rest of the document loads.
    let schedule = r#"{
        "F1": { "day": "1", "destination": "YYZ", "origin": "YUL" },
        "F2": { "day": "day after tomorrow", "destination": "YYZ", "origin": "YUL" }
    }"#;
    let order_list = r#"{
        "ORD-001": { "destination": "YYZ" }
    }"#;

    let mut loaded = parse_flight_schedule(schedule).unwrap();
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].flight_id, "F2");

    let lines = report::schedule_lines(&loaded.catalog);
    assert_eq!(
        lines,
        vec!["Flight: F1, departure: YUL, arrival: YYZ, day: 1"]
    );

    let mut queue = parse_order_schedule(order_list).unwrap();
    AssignmentEngine::new().assign_all(&mut loaded.catalog, &mut queue);

    let f1 = loaded.catalog.key_of("F1").unwrap();
    assert_eq!(queue.get(0).unwrap().assigned_flight(), Some(f1));
}

#[test]
fn capacity_exhaustion_end_to_end() {
    // 25 orders against a single 20-seat flight: exactly the first 20 in
    // document order are scheduled.
    let schedule = r#"{
        "F1": { "day": "1", "destination": "YYZ", "origin": "YUL" }
    }"#;

    let mut order_list = String::from("{");
    for i in 0..25 {
        if i > 0 {
            order_list.push(',');
        }
        order_list.push_str(&format!(r#""ORD-{i:03}": {{ "destination": "YYZ" }}"#));
    }
    order_list.push('}');

    let mut loaded = parse_flight_schedule(schedule).unwrap();
    let mut queue = parse_order_schedule(&order_list).unwrap();

    let summary = AssignmentEngine::new().assign_all(&mut loaded.catalog, &mut queue);

    assert_eq!(summary.orders_assigned, u64::from(MAX_FLIGHT_CAPACITY));
    assert_eq!(summary.orders_unfulfilled, 5);
    assert_eq!(
        loaded.catalog.get_by_id("F1").unwrap().load(),
        MAX_FLIGHT_CAPACITY
    );

    for (i, order) in queue.iter().enumerate() {
        assert_eq!(order.is_assigned(), i < MAX_FLIGHT_CAPACITY as usize);
    }
}

// ============================================================================
// STRESS AND INVARIANTS
// ============================================================================

#[test]
fn stress_invariants_hold() {
    let mut catalog = generate_catalog(4);
    let mut queue = generate_orders(STRESS_ORDER_COUNT, 42);

    let summary = AssignmentEngine::new().assign_all(&mut catalog, &mut queue);

    assert_eq!(summary.orders_processed, STRESS_ORDER_COUNT as u64);
    assert_eq!(
        summary.orders_assigned + summary.orders_unfulfilled,
        summary.orders_processed
    );

    // No flight is ever loaded past its capacity
    for (_, flight) in catalog.iter() {
        assert!(flight.load() <= flight.max_capacity());
    }

    // Every committed load increment belongs to exactly one assigned order
    assert_eq!(catalog.total_load(), summary.orders_assigned);

    for order in queue.iter() {
        match order.assigned_flight() {
            Some(key) => {
                // The bound flight matched the order when it was assigned
                let flight = catalog.get(key).unwrap();
                assert_eq!(flight.origin, order.origin);
                assert_eq!(flight.destination, order.destination);
            }
            None => {
                // Loads never shrink, so every flight this order could have
                // taken must still be full after the pass
                for (_, flight) in catalog.iter() {
                    if flight.origin == order.origin
                        && flight.destination == order.destination
                    {
                        assert!(flight.is_full());
                    }
                }
            }
        }
    }
}

#[test]
fn stress_runs_are_deterministic() {
    let first = run_assignment(4, STRESS_ORDER_COUNT, 42);
    let second = run_assignment(4, STRESS_ORDER_COUNT, 42);

    assert_eq!(first, second, "identical input must produce identical bindings");
}

#[test]
fn earlier_orders_take_capacity_first() {
    // One destination, one day, two flights: 40 seats for 50 orders.
    let mut catalog = FlightCatalog::new();
    catalog.insert(Flight::new("F1", "YUL", "YYZ", 1));
    catalog.insert(Flight::new("F2", "YUL", "YYZ", 1));

    let mut queue = OrderQueue::new();
    for i in 0..50 {
        queue.push(Order::new(format!("ORD-{i:03}"), "YYZ"));
    }

    AssignmentEngine::new().assign_all(&mut catalog, &mut queue);

    // Assigned orders form a prefix of the queue
    let statuses: Vec<bool> = queue.iter().map(|o| o.is_assigned()).collect();
    let assigned_count = statuses.iter().filter(|&&assigned| assigned).count();
    assert_eq!(assigned_count, 40);
    assert!(statuses[..40].iter().all(|&assigned| assigned));
    assert!(statuses[40..].iter().all(|&assigned| !assigned));

    // The day tie resolves to the first catalog entry until it fills
    let f1 = catalog.key_of("F1").unwrap();
    let f2 = catalog.key_of("F2").unwrap();
    assert!((0..20).all(|i| queue.get(i).unwrap().assigned_flight() == Some(f1)));
    assert!((20..40).all(|i| queue.get(i).unwrap().assigned_flight() == Some(f2)));
}
