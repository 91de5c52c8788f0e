//! Zone analysis of a single team across a batch of events.

use std::time::Instant;

use tracing::debug;

use crate::event::Event;
use crate::filter::Slices;
use crate::probs;
use crate::probs::ZoneProbabilities;
use crate::stats::{aggregate_passes, aggregate_shots, PassStats, ShotStats};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneAnalysis {
    pub shots_taken: ShotStats,
    pub shots_faced: ShotStats,
    pub passes_made: PassStats,
    pub passes_faced: PassStats,
    pub probabilities: ZoneProbabilities,
}
impl ZoneAnalysis {
    pub fn compute<'e>(team: &str, events: impl IntoIterator<Item = &'e Event>) -> Self {
        let start = Instant::now();
        let slices = Slices::partition(events, team);
        debug!(
            "{team}: {} shots taken, {} shots faced, {} passes made, {} passes faced",
            slices.shots_for.len(),
            slices.shots_against.len(),
            slices.passes_for.len(),
            slices.passes_against.len()
        );

        let shots_taken = aggregate_shots(slices.shots_for);
        let shots_faced = aggregate_shots(slices.shots_against);
        let passes_made = aggregate_passes(slices.passes_for);
        let passes_faced = aggregate_passes(slices.passes_against);
        debug!(
            "dropped {} of {} passes made and {} of {} passes faced",
            passes_made.total_dropped(),
            passes_made.number_of_passes,
            passes_faced.total_dropped(),
            passes_faced.number_of_passes
        );

        let probabilities = probs::compute(&shots_taken, &shots_faced, &passes_made, &passes_faced);
        debug!("analysis took {:?}", start.elapsed());
        Self {
            shots_taken,
            shots_faced,
            passes_made,
            passes_faced,
            probabilities,
        }
    }
}
