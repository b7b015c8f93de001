//! Tests for the process-wide default container.
//!
//! NOTE: all tests use #[serial] because they mutate the one shared instance;
//! running them in parallel would interleave writes non-deterministically.

use serial_test::serial;

use feature_container::{property, Container};

property!(SharedCount: u64 = 0);
property!(SharedLabel: String = "initial".to_string());

#[test]
#[serial]
fn shared_returns_the_same_store_everywhere() {
    Container::shared().set::<SharedCount>(31);
    assert_eq!(Container::shared().get::<SharedCount>(), 31);

    // A clone of the shared handle still points at the same store.
    let handle = Container::shared().clone();
    handle.set::<SharedCount>(32);
    assert_eq!(Container::shared().get::<SharedCount>(), 32);

    Container::shared().reset::<SharedCount>();
}

#[test]
#[serial]
fn shared_state_is_visible_across_threads() {
    Container::shared().set::<SharedLabel>("from main".to_string());

    let handle = std::thread::spawn(|| Container::shared().get::<SharedLabel>());
    assert_eq!(handle.join().unwrap(), "from main");

    Container::shared().reset::<SharedLabel>();
}

#[test]
#[serial]
fn local_containers_do_not_leak_into_the_shared_one() {
    let local = Container::new();
    local.set::<SharedCount>(1000);

    assert_eq!(Container::shared().get::<SharedCount>(), 0);

    Container::shared().reset::<SharedCount>();
}
