//! Observation example: subscribing to transitions and cancelling again.
//!
//! Demonstrates:
//! - Observers hear lazy materialization, sets and resets
//! - Subscribing does not materialize anything
//! - Cancellation via the returned token
//! - The tracing callback as an operations-level view
//!
//! Run with: `cargo run --example observers`

use feature_container::{property, Container};

property!(Count: u64 = 0);

fn main() {
    println!("=== feature-container: Observers ===\n");

    let container = Container::new();

    // -------------------------------------------------------------------------
    // 1. Subscribe before anything exists
    // -------------------------------------------------------------------------
    println!("1. Subscribing to Count (nothing is materialized yet)...");

    let subscription = container.observe::<Count>(|value| {
        println!("   observer: Count -> {value}");
    });

    // -------------------------------------------------------------------------
    // 2. The first read is the first transition
    // -------------------------------------------------------------------------
    println!("\n2. First get materializes the default and notifies...");
    let _ = container.get::<Count>();

    println!("\n3. Sets and resets notify too (even with an equal value)...");
    container.set::<Count>(5);
    container.set::<Count>(5);
    container.reset::<Count>();

    // -------------------------------------------------------------------------
    // 4. Cancellation
    // -------------------------------------------------------------------------
    println!("\n4. After cancel() the observer is silent...");
    subscription.cancel();
    container.set::<Count>(99);
    println!("   Count = {} (no observer output above)", container.get::<Count>());

    // -------------------------------------------------------------------------
    // 5. Tracing
    // -------------------------------------------------------------------------
    println!("\n5. The tracing callback sees operations, not just transitions...");
    container.set_trace_callback(|event| println!("   trace: {event}"));
    let _ = container.get::<Count>();
    container.reset::<Count>();

    println!("\n=== Example Complete ===");
}
