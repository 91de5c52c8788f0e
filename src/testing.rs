//! Testing helpers.

use assert_float_eq::*;

use crate::event::{Event, EventType, PassOutcome, ShotOutcome};
use crate::probs::Metric;

pub const HOME: &str = "England";
pub const AWAY: &str = "Sweden";

pub fn assert_probs_near(expected: &[(Metric, f64)], actual: &[(Metric, f64)]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, (expected_metric, expected_prob)) in expected.iter().enumerate() {
        let (actual_metric, actual_prob) = &actual[index];
        assert_eq!(expected_metric, actual_metric, "metric mismatch at index {index}");
        if actual_prob != expected_prob {
            assert_float_absolute_eq!(*expected_prob, *actual_prob, 1e-9);
        }
    }
}

/// A short, hand-checked match between [HOME] and [AWAY], interleaved with events that play no part
/// in zone statistics.
pub fn fixture_match() -> Vec<Event> {
    let mut half_start = Event::pass(HOME, (60.0, 40.0), (50.0, 40.0), None);
    half_start.event_type = EventType::Other(18);
    half_start.location = None;
    half_start.pass = None;

    vec![
        half_start,
        // home attack down the right
        Event::pass(HOME, (95.0, 10.0), (116.0, 40.0), None),
        Event::shot(HOME, (116.0, 40.0), ShotOutcome::Goal),
        // home build-up through the middle
        Event::pass(HOME, (95.0, 40.0), (108.0, 40.0), None),
        Event::pass(HOME, (108.0, 40.0), (95.0, 70.0), Some(PassOutcome::Incomplete)),
        Event::shot(HOME, (108.0, 40.0), ShotOutcome::Saved),
        // recycled in midfield, never reaches a zone
        Event::pass(HOME, (60.0, 40.0), (70.0, 20.0), None),
        Event::shot(HOME, (80.0, 40.0), ShotOutcome::Wayward),
        // away counter
        Event::pass(AWAY, (95.0, 70.0), (116.0, 40.0), None),
        Event::pass(AWAY, (95.0, 40.0), (95.0, 10.0), Some(PassOutcome::Out)),
        Event::shot(AWAY, (116.0, 40.0), ShotOutcome::Saved),
        Event::shot(AWAY, (95.0, 40.0), ShotOutcome::Goal),
        Event::shot(AWAY, (100.0, 15.0), ShotOutcome::Blocked),
    ]
}
