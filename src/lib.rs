//! Zone-based tactical probabilities for a football team, derived from open-data match events.
//! Classifies shot and pass coordinates into five attacking-third zones, aggregates per-zone
//! counters for the team and its opponents, and derives the probabilities a match simulation
//! engine consumes as `#define` constants.

pub mod analysis;
pub mod config;
pub mod data;
pub mod event;
pub mod filter;
pub mod print;
pub mod probs;
pub mod stats;
pub mod zone;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
