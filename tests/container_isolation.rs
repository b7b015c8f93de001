//! Independent containers share nothing: entries, observers, and trace
//! callbacks are all per-instance. Clones of one container are handles to the
//! same store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use feature_container::{property, Container, ContainerEvent};

property!(Count: u64 = 0);

#[test]
fn entries_are_isolated_between_containers() {
    let first = Container::new();
    let second = Container::new();

    first.set::<Count>(1);
    second.set::<Count>(2);

    assert_eq!(first.get::<Count>(), 1);
    assert_eq!(second.get::<Count>(), 2);
}

#[test]
fn lazy_materialization_in_one_container_leaves_the_other_untouched() {
    let first = Container::new();
    let second = Container::new();

    let _ = first.get::<Count>();
    first.set::<Count>(41);

    // The second container still materializes its own default.
    assert_eq!(second.get::<Count>(), 0);
}

#[test]
fn observers_are_isolated_between_containers() {
    let first = Container::new();
    let second = Container::new();

    let calls = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&calls);
    let _subscription = first.observe::<Count>(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    second.set::<Count>(5);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    first.set::<Count>(5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn trace_callbacks_are_isolated_between_containers() {
    let first = Container::new();
    let second = Container::new();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    first.set_trace_callback(move |event: &ContainerEvent| {
        sink.lock().unwrap().push(event.to_string());
    });

    second.set::<Count>(3);
    assert!(events.lock().unwrap().is_empty());

    first.set::<Count>(3);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn clones_are_handles_to_the_same_store() {
    let container = Container::new();
    let handle = container.clone();

    handle.set::<Count>(17);
    assert_eq!(container.get::<Count>(), 17);

    let calls = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&calls);
    let _subscription = container.observe::<Count>(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    handle.set::<Count>(18);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_one_handle_keeps_the_store_alive() {
    let container = Container::new();
    let handle = container.clone();
    handle.set::<Count>(23);
    drop(handle);
    assert_eq!(container.get::<Count>(), 23);
}
