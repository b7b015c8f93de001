//! Integration tests for the property side of the container: lazy defaults,
//! overwrites, and reset semantics, including generative defaults, where
//! reset stores a *new* default rather than the original one.

use feature_container::{property, Container};
use uuid::Uuid;

property!(Count: u64 = 0);
property!(Greeting: String = "hello".to_string());
property!(Threshold: f64 = 0.5);

#[test]
fn get_before_any_write_returns_the_default() {
    let container = Container::new();
    assert_eq!(container.get::<Count>(), 0);
    assert_eq!(container.get::<Greeting>(), "hello");
    assert_eq!(container.get::<Threshold>(), 0.5);
}

#[test]
fn count_scenario() {
    let container = Container::new();
    assert_eq!(container.get::<Count>(), 0);
    container.set::<Count>(5);
    assert_eq!(container.get::<Count>(), 5);
    container.reset::<Count>();
    assert_eq!(container.get::<Count>(), 0);
}

#[test]
fn set_is_sticky_across_re_reads() {
    let container = Container::new();
    container.set::<Greeting>("hi".to_string());
    assert_eq!(container.get::<Greeting>(), "hi");
    assert_eq!(container.get::<Greeting>(), "hi");
}

#[test]
fn set_before_first_get_skips_the_default() {
    let container = Container::new();
    container.set::<Count>(9);
    assert_eq!(container.get::<Count>(), 9);
}

#[test]
fn kinds_with_the_same_value_type_do_not_collide() {
    property!(Width: u64 = 1);
    property!(Height: u64 = 2);

    let container = Container::new();
    container.set::<Width>(640);
    assert_eq!(container.get::<Width>(), 640);
    assert_eq!(container.get::<Height>(), 2);
}

#[test]
fn reset_with_a_generative_default_yields_a_new_value() {
    let container = Container::new();
    let initial = Uuid::new_v4();
    container.set::<Uuid>(initial);
    container.reset::<Uuid>();
    let after_reset = container.get::<Uuid>();
    assert_ne!(after_reset, initial);
    // Sticky again until the next reset.
    assert_eq!(container.get::<Uuid>(), after_reset);
}

#[test]
fn lazily_materialized_generative_default_is_sticky() {
    let container = Container::new();
    let first = container.get::<Uuid>();
    assert_eq!(container.get::<Uuid>(), first);
}
