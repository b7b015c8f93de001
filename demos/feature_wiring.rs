//! Feature wiring example: services that load themselves from the container.
//!
//! Demonstrates:
//! - Declaring features whose `load` pulls properties and other features
//! - Lazy, cached construction
//! - Installing test doubles with `set_feature`
//! - Evicting with `reset_feature` so changed dependencies are picked up
//!
//! Run with: `cargo run --example feature_wiring`

use std::time::Duration;

use feature_container::common::Clock;
use feature_container::{feature, property, Container};

property!(Endpoint: String = "localhost:4000".to_string());
property!(RetryLimit: u32 = 3);

#[derive(Clone, Debug)]
struct Connector {
    endpoint: String,
    retries: u32,
}

feature!(
    /// The outbound connection, wired from configuration properties.
    Connection: Connector = |container: &Container| Connector {
        endpoint: container.get::<Endpoint>(),
        retries: container.get::<RetryLimit>(),
    }
);

#[derive(Clone, Debug)]
struct Reporter {
    connector: Connector,
    started_at: Duration,
}

feature!(
    /// Depends on another feature and on the clock.
    Reporting: Reporter = |container: &Container| Reporter {
        connector: container.feature::<Connection>(),
        started_at: container.feature::<Clock>().now(),
    }
);

fn main() {
    println!("=== feature-container: Feature Wiring ===\n");

    // -------------------------------------------------------------------------
    // 1. Lazy composition
    // -------------------------------------------------------------------------
    println!("1. Reading a feature builds it and everything it depends on...");

    let container = Container::new();
    let reporter = container.feature::<Reporting>();
    println!("   Reporter  = {:?}", reporter);
    println!("   Container = {:?}", container);

    // -------------------------------------------------------------------------
    // 2. Instances are cached
    // -------------------------------------------------------------------------
    println!("\n2. A second read returns the cached instance...");

    container.set::<Endpoint>("db:5432".to_string());
    println!(
        "   endpoint still {:?}",
        container.feature::<Connection>().endpoint
    );

    // -------------------------------------------------------------------------
    // 3. Eviction rebuilds against current state
    // -------------------------------------------------------------------------
    println!("\n3. After reset_feature the next read rebuilds...");

    container.reset_feature::<Connection>();
    println!(
        "   endpoint now  {:?}",
        container.feature::<Connection>().endpoint
    );

    // -------------------------------------------------------------------------
    // 4. Test doubles
    // -------------------------------------------------------------------------
    println!("\n4. A fresh container with a frozen clock...");

    let test_container = Container::new();
    test_container.set_feature::<Clock>(Clock::fixed(Duration::from_secs(1_700_000_000)));
    let frozen = test_container.feature::<Reporting>();
    println!("   started_at = {}s", frozen.started_at.as_secs());

    println!("\n=== Example Complete ===");
}
