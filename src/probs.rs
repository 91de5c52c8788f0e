//! Derivation of per-zone tactical probabilities from aggregated shot and pass counters.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use ordinalizer::Ordinal;
use strum::IntoEnumIterator;

use crate::stats::{PassStats, ShotStats};
use crate::zone::Zone;

/// `numerator / denominator`, or `0.0` when the denominator is zero.
#[inline]
pub fn safe_div(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Shoot,
    Block,
    ShotOnTarget,
    Intercept,
    AttemptPass { from: Zone, to: Zone },
    PassAccurate { from: Zone, to: Zone },
}
impl Metric {
    /// Whether the metric name already carries its zone reference.
    pub fn is_zone_pair(&self) -> bool {
        matches!(self, Metric::AttemptPass { .. } | Metric::PassAccurate { .. })
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Shoot => write!(f, "shootProbability"),
            Metric::Block => write!(f, "blockProbability"),
            Metric::ShotOnTarget => write!(f, "shotOnTargetProbability"),
            Metric::Intercept => write!(f, "interceptProbability"),
            Metric::AttemptPass { from, to } => write!(f, "{from}_to_{to}_attemptPassProbability"),
            Metric::PassAccurate { from, to } => write!(f, "{from}_to_{to}_passAccurateProbability"),
        }
    }
}

/// The probabilities derived for one zone, in derivation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProbs {
    zone: Zone,
    entries: Vec<(Metric, f64)>,
}
impl ZoneProbs {
    fn new(zone: Zone) -> Self {
        let capacity = 4 + 2 * zone.valid_targets().len();
        Self {
            zone,
            entries: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, metric: Metric, prob: f64) {
        debug_assert!((0.0..=1.0).contains(&prob), "{metric} out of range: {prob}");
        self.entries.push((metric, prob));
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn entries(&self) -> &[(Metric, f64)] {
        &self.entries
    }

    pub fn get(&self, metric: &Metric) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == metric)
            .map(|(_, prob)| *prob)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProbabilities {
    zones: Vec<ZoneProbs>,
}
impl ZoneProbabilities {
    /// Zones in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneProbs> {
        self.zones.iter()
    }
}

impl Index<Zone> for ZoneProbabilities {
    type Output = ZoneProbs;

    fn index(&self, zone: Zone) -> &Self::Output {
        &self.zones[zone.ordinal()]
    }
}

/// Combines the four aggregates of a single team into per-zone probabilities.
///
/// * `shots_taken`, `passes_made` — events by the team under analysis;
/// * `shots_faced`, `passes_faced` — events by its opponents.
///
/// The intercept probability is derived from the opponents' pass totals across all zones and is
/// therefore the same in every zone.
pub fn compute(
    shots_taken: &ShotStats,
    shots_faced: &ShotStats,
    passes_made: &PassStats,
    passes_faced: &PassStats,
) -> ZoneProbabilities {
    let intercept = safe_div(
        passes_faced.total_valid_passes_completed(),
        passes_faced.total_valid_passes_attempted(),
    );

    let zones = Zone::iter()
        .map(|zone| {
            let taken = &shots_taken[zone];
            let faced = &shots_faced[zone];
            let made = &passes_made[zone];

            let mut probs = ZoneProbs::new(zone);
            probs.push(
                Metric::Shoot,
                safe_div(taken.total_shots, taken.total_shots + made.passes_attempted),
            );
            probs.push(Metric::Block, safe_div(faced.goal, faced.on_target));
            probs.push(
                Metric::ShotOnTarget,
                safe_div(taken.on_target, taken.total_shots),
            );
            probs.push(Metric::Intercept, intercept);

            for (target, pair) in made.targets() {
                probs.push(
                    Metric::AttemptPass {
                        from: zone,
                        to: *target,
                    },
                    safe_div(pair.attempted, pair.attempted + taken.total_shots),
                );
                probs.push(
                    Metric::PassAccurate {
                        from: zone,
                        to: *target,
                    },
                    safe_div(pair.completed, pair.attempted),
                );
            }
            probs
        })
        .collect();

    ZoneProbabilities { zones }
}
