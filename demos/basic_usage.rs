//! Basic usage example for feature-container.
//!
//! Demonstrates:
//! - Declaring property kinds with `property!`
//! - Lazy defaults, overwrites and resets
//! - Distinct kinds sharing one value type
//! - The process-wide shared container
//!
//! Run with: `cargo run --example basic_usage`

use feature_container::{property, Container};

property!(
    /// Service name shown in logs and banners.
    AppName: String = "demo-app".to_string()
);
property!(RetryLimit: u32 = 3);
property!(Verbose: bool = false);

// Two kinds, one value type, two separate slots.
property!(WindowWidth: u32 = 1280);
property!(WindowHeight: u32 = 720);

fn main() {
    println!("=== feature-container: Basic Usage ===\n");

    let container = Container::new();

    // -------------------------------------------------------------------------
    // 1. Lazy defaults
    // -------------------------------------------------------------------------
    println!("1. Reading untouched properties materializes their defaults...");

    println!("   AppName    = {:?}", container.get::<AppName>());
    println!("   RetryLimit = {}", container.get::<RetryLimit>());
    println!("   Verbose    = {}", container.get::<Verbose>());

    // -------------------------------------------------------------------------
    // 2. Overwrites
    // -------------------------------------------------------------------------
    println!("\n2. Setting values...");

    container.set::<RetryLimit>(5);
    container.set::<Verbose>(true);

    println!("   RetryLimit = {}", container.get::<RetryLimit>());
    println!("   Verbose    = {}", container.get::<Verbose>());

    // -------------------------------------------------------------------------
    // 3. Kinds do not collide on value type
    // -------------------------------------------------------------------------
    println!("\n3. Two u32 kinds keep separate slots...");

    container.set::<WindowWidth>(1920);
    println!("   WindowWidth  = {}", container.get::<WindowWidth>());
    println!("   WindowHeight = {}", container.get::<WindowHeight>());

    // -------------------------------------------------------------------------
    // 4. Reset
    // -------------------------------------------------------------------------
    println!("\n4. Resetting restores a freshly evaluated default...");

    container.reset::<RetryLimit>();
    println!("   RetryLimit = {}", container.get::<RetryLimit>());

    // -------------------------------------------------------------------------
    // 5. The shared container
    // -------------------------------------------------------------------------
    println!("\n5. The process-wide container works the same way...");

    Container::shared().set::<AppName>("composed-at-root".to_string());
    println!("   shared AppName = {:?}", Container::shared().get::<AppName>());
    println!("   local AppName  = {:?}", container.get::<AppName>());

    println!("\n=== Example Complete ===");
}
