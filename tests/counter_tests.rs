// Host-side tests for the count-up animation.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;

fn hundred_from(start_ms: f64) -> CounterAnimation {
    CounterAnimation::from_attr("100", start_ms).expect("finite target")
}

#[test]
fn counts_linearly_to_target() {
    let c = hundred_from(0.0);
    assert_eq!(c.duration_ms, 2000.0);
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.value_at(1000.0), 50);
    assert_eq!(c.value_at(2000.0), 100);
}

#[test]
fn stays_at_target_after_duration() {
    let c = hundred_from(500.0);
    for t in [2500.0, 2501.0, 4000.0, 1.0e9] {
        assert_eq!(c.value_at(t), 100, "at {t}");
        assert!(c.is_finished(t));
    }
    assert!(!c.is_finished(2499.0));
}

#[test]
fn samples_before_start_read_zero() {
    let c = hundred_from(1000.0);
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.value_at(1000.0), 0);
}

#[test]
fn value_never_decreases() {
    let c = CounterAnimation::from_attr("365", 0.0).unwrap();
    let mut prev = 0;
    for step in 0..=250 {
        let v = c.value_at(step as f64 * 10.0);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(prev, 365);
}

#[test]
fn infinity_sentinel_never_animates() {
    assert_eq!(CounterTarget::parse("∞"), Some(CounterTarget::Infinite));
    assert!(CounterAnimation::from_attr("∞", 0.0).is_none());
    assert!(CounterAnimation::from_attr(" ∞ ", 0.0).is_none());
    assert!(CounterAnimation::from_attr("Infinity", 0.0).is_none());
}

#[test]
fn parses_leading_integer() {
    assert_eq!(CounterTarget::parse("42"), Some(CounterTarget::Finite(42)));
    assert_eq!(CounterTarget::parse("42 days"), Some(CounterTarget::Finite(42)));
    assert_eq!(CounterTarget::parse("-7"), Some(CounterTarget::Finite(-7)));
    assert_eq!(CounterTarget::parse("abc"), None);
    assert_eq!(CounterTarget::parse(""), None);
    assert!(CounterAnimation::from_attr("n/a", 0.0).is_none());
}
