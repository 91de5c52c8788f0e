//! Classification of pitch coordinates into the five attacking-third zones.
//!
//! Pitch coordinates span `x ∈ [0, 120]`, `y ∈ [0, 80]`, with the attacking goal at `x = 120`. Each
//! zone is an open rectangle, so a coordinate lying exactly on a zone edge falls outside that zone.
//! The rectangles of zones 1 and 3 overlap those of zones 4 and 5; [classify] resolves this by
//! testing the zones in ascending order and taking the first match.

use ordinalizer::Ordinal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::event::Location;

mod adjacency;

/// Numeric label used wherever an unclassified coordinate must be rendered as a zone number.
pub const UNCLASSIFIED: i8 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Ordinal, EnumCount, EnumIter, Display)]
pub enum Zone {
    #[strum(serialize = "zoneOne")]
    One,
    #[strum(serialize = "zoneTwo")]
    Two,
    #[strum(serialize = "zoneThree")]
    Three,
    #[strum(serialize = "zoneFour")]
    Four,
    #[strum(serialize = "zoneFive")]
    Five,
}
impl Zone {
    pub fn number(&self) -> u8 {
        self.ordinal() as u8 + 1
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Zone::One => Bounds::new(90.0, 0.0, 120.0, 30.0),
            Zone::Two => Bounds::new(114.0, 30.0, 120.0, 50.0),
            Zone::Three => Bounds::new(90.0, 50.0, 120.0, 80.0),
            Zone::Four => Bounds::new(102.0, 20.0, 114.0, 60.0),
            Zone::Five => Bounds::new(90.0, 20.0, 102.0, 60.0),
        }
    }

    /// Whether `location` lies strictly inside this zone's rectangle, irrespective of any
    /// lower-numbered zone that may also contain it.
    pub fn contains(&self, location: &Location) -> bool {
        self.bounds().contains(location)
    }
}

/// An axis-aligned rectangle with exclusive edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}
impl Bounds {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    #[inline]
    pub fn contains(&self, location: &Location) -> bool {
        self.x_min < location.x
            && location.x < self.x_max
            && self.y_min < location.y
            && location.y < self.y_max
    }
}

#[inline]
pub fn classify(location: &Location) -> Option<Zone> {
    Zone::iter().find(|zone| zone.contains(location))
}

/// The zone number of a classification, or [UNCLASSIFIED].
pub fn zone_number(zone: Option<Zone>) -> i8 {
    zone.map(|zone| zone.number() as i8).unwrap_or(UNCLASSIFIED)
}
