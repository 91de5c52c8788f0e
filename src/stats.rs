//! Per-zone shot and pass counters.
//!
//! [aggregate_shots] and [aggregate_passes] are pure reducers over a filtered event slice: the
//! resulting counters depend only on the input sequence.

use std::ops::Index;

use ordinalizer::Ordinal;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};
use tracing::trace;

use crate::event::{Event, ShotOutcome};
use crate::zone::{classify, Zone};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneStat {
    pub total_shots: u32,
    pub on_target: u32,
    pub goal: u32,
    pub off_target: u32,
}
impl ZoneStat {
    fn record(&mut self, outcome: &ShotOutcome) {
        self.total_shots += 1;
        if outcome.is_goal() {
            self.goal += 1;
        }
        if outcome.is_on_target() {
            self.on_target += 1;
        } else {
            self.off_target += 1;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotStats {
    zones: [ZoneStat; Zone::COUNT],

    /// Every shot in the slice, classified or not.
    pub number_of_shots: u32,

    /// Shots excluded from zone statistics, either because their location fell outside every zone
    /// or because the location or outcome was missing.
    pub skipped: u32,
}
impl ShotStats {
    pub fn zones(&self) -> impl Iterator<Item = (Zone, &ZoneStat)> {
        Zone::iter().zip(self.zones.iter())
    }
}

impl Index<Zone> for ShotStats {
    type Output = ZoneStat;

    fn index(&self, zone: Zone) -> &Self::Output {
        &self.zones[zone.ordinal()]
    }
}

pub fn aggregate_shots<'e>(shots: impl IntoIterator<Item = &'e Event>) -> ShotStats {
    let mut stats = ShotStats::default();
    for shot in shots {
        stats.number_of_shots += 1;
        let location = shot.location.as_ref();
        let outcome = shot.shot.as_ref().and_then(|detail| detail.outcome.as_ref());
        let (Some(location), Some(outcome)) = (location, outcome) else {
            trace!("skipping shot with missing location or outcome: {shot:?}");
            stats.skipped += 1;
            continue;
        };
        match classify(location) {
            None => stats.skipped += 1,
            Some(zone) => stats.zones[zone.ordinal()].record(outcome),
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairStat {
    pub attempted: u32,
    pub completed: u32,
}
impl PairStat {
    fn record(&mut self, completed: bool) {
        self.attempted += 1;
        if completed {
            self.completed += 1;
        }
    }
}

/// Pass counters for a single source zone. The target table holds exactly one entry for each of the
/// source zone's valid targets, in adjacency order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassZoneStat {
    pub passes_attempted: u32,
    pub passes_completed: u32,
    zone: Zone,
    targets: Vec<(Zone, PairStat)>,
}
impl PassZoneStat {
    pub fn new(zone: Zone) -> Self {
        Self {
            passes_attempted: 0,
            passes_completed: 0,
            zone,
            targets: zone
                .valid_targets()
                .iter()
                .map(|&target| (target, PairStat::default()))
                .collect(),
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn targets(&self) -> &[(Zone, PairStat)] {
        &self.targets
    }

    /// Counters for passes into `target`, or `None` if `target` is not a valid target of this zone.
    pub fn target(&self, target: Zone) -> Option<&PairStat> {
        self.targets
            .iter()
            .find(|(candidate, _)| *candidate == target)
            .map(|(_, stat)| stat)
    }

    fn record(&mut self, target: Zone, completed: bool) -> Result<(), DropReason> {
        let (_, stat) = self
            .targets
            .iter_mut()
            .find(|(candidate, _)| *candidate == target)
            .ok_or(DropReason::InvalidTarget)?;
        stat.record(completed);
        self.passes_attempted += 1;
        if completed {
            self.passes_completed += 1;
        }
        Ok(())
    }
}

/// Why a pass was excluded from zone statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ordinal, EnumCount, EnumIter, Display)]
pub enum DropReason {
    MissingField,
    UnclassifiedSource,
    UnclassifiedTarget,
    SameZone,
    InvalidTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassStats {
    zones: Vec<PassZoneStat>,

    /// Every pass in the slice, counted or dropped.
    pub number_of_passes: u32,
    dropped: [u32; DropReason::COUNT],
}
impl PassStats {
    pub fn zones(&self) -> impl Iterator<Item = &PassZoneStat> {
        self.zones.iter()
    }

    pub fn total_valid_passes_attempted(&self) -> u32 {
        self.zones.iter().map(|stat| stat.passes_attempted).sum()
    }

    pub fn total_valid_passes_completed(&self) -> u32 {
        self.zones.iter().map(|stat| stat.passes_completed).sum()
    }

    pub fn dropped(&self, reason: DropReason) -> u32 {
        self.dropped[reason.ordinal()]
    }

    pub fn total_dropped(&self) -> u32 {
        self.dropped.iter().sum()
    }
}

impl Default for PassStats {
    fn default() -> Self {
        Self {
            zones: Zone::iter().map(PassZoneStat::new).collect(),
            number_of_passes: 0,
            dropped: [0; DropReason::COUNT],
        }
    }
}

impl Index<Zone> for PassStats {
    type Output = PassZoneStat;

    fn index(&self, zone: Zone) -> &Self::Output {
        &self.zones[zone.ordinal()]
    }
}

/// Resolves the source and target zones of a pass, provided the pair is eligible for counting.
pub fn classify_pass(event: &Event) -> Result<(Zone, Zone), DropReason> {
    let location = event.location.as_ref().ok_or(DropReason::MissingField)?;
    let end_location = event
        .pass
        .as_ref()
        .and_then(|pass| pass.end_location.as_ref())
        .ok_or(DropReason::MissingField)?;
    let source = classify(location).ok_or(DropReason::UnclassifiedSource)?;
    let target = classify(end_location).ok_or(DropReason::UnclassifiedTarget)?;
    if source == target {
        Err(DropReason::SameZone)
    } else if !source.is_valid_target(target) {
        Err(DropReason::InvalidTarget)
    } else {
        Ok((source, target))
    }
}

pub fn aggregate_passes<'e>(passes: impl IntoIterator<Item = &'e Event>) -> PassStats {
    let mut stats = PassStats::default();
    for pass in passes {
        stats.number_of_passes += 1;
        let counted = classify_pass(pass).and_then(|(source, target)| {
            let completed = pass.pass.as_ref().map(|detail| detail.is_completed()).unwrap_or(false);
            stats.zones[source.ordinal()].record(target, completed)
        });
        if let Err(reason) = counted {
            stats.dropped[reason.ordinal()] += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests;
