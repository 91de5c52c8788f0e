//! Match event records, as supplied by an open-data event feed.
//!
//! Only the fields needed for zone statistics are modelled; everything else in the feed is ignored
//! during deserialisation. Payload fields are optional because their presence varies by event type,
//! and a missing field must never fail the decoding of an entire match.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum_macros::EnumString;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Location {
    pub x: f64,
    pub y: f64,
}
impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error)]
#[error("expected at least 2 coordinates, got {0}")]
pub struct InsufficientCoordinates(usize);

impl TryFrom<Vec<f64>> for Location {
    type Error = InsufficientCoordinates;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords[..] {
            [x, y, ..] => Ok(Self { x, y }),
            _ => Err(InsufficientCoordinates(coords.len())),
        }
    }
}

/// Decodes an optional coordinate array, treating a malformed array as an absent location.
fn lenient_location<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Location>, D::Error> {
    let coords = Option::<Vec<f64>>::deserialize(deserializer)?;
    Ok(coords.and_then(|coords| match Location::try_from(coords) {
        Ok(location) => Some(location),
        Err(err) => {
            trace!("ignoring location: {err}");
            None
        }
    }))
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "TypeRef")]
pub enum EventType {
    Shot,
    Pass,
    Other(u16),
}
impl EventType {
    pub const SHOT_ID: u16 = 16;
    pub const PASS_ID: u16 = 30;

    pub fn id(&self) -> u16 {
        match self {
            EventType::Shot => Self::SHOT_ID,
            EventType::Pass => Self::PASS_ID,
            EventType::Other(id) => *id,
        }
    }
}

impl From<u16> for EventType {
    fn from(id: u16) -> Self {
        match id {
            Self::SHOT_ID => EventType::Shot,
            Self::PASS_ID => EventType::Pass,
            other => EventType::Other(other),
        }
    }
}

#[derive(Deserialize)]
struct TypeRef {
    id: u16,
}

impl From<TypeRef> for EventType {
    fn from(type_ref: TypeRef) -> Self {
        type_ref.id.into()
    }
}

#[derive(Deserialize)]
struct NameRef {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub name: String,
}
impl Team {
    /// Case-insensitive exact match on the team name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Deserialize)]
#[serde(from = "NameRef")]
pub enum ShotOutcome {
    Goal,
    Saved,
    #[strum(serialize = "Saved To Post")]
    SavedToPost,
    Blocked,
    #[strum(serialize = "Off T")]
    OffTarget,
    Post,
    Wayward,
    #[strum(serialize = "Saved Off Target")]
    SavedOffTarget,
    #[strum(disabled)]
    Other(String),
}
impl ShotOutcome {
    pub fn is_goal(&self) -> bool {
        matches!(self, ShotOutcome::Goal)
    }

    pub fn is_on_target(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Goal | ShotOutcome::Saved | ShotOutcome::SavedToPost
        )
    }
}

impl From<NameRef> for ShotOutcome {
    fn from(name_ref: NameRef) -> Self {
        ShotOutcome::from_str(&name_ref.name).unwrap_or(ShotOutcome::Other(name_ref.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Deserialize)]
#[serde(from = "NameRef")]
pub enum PassOutcome {
    Incomplete,
    Out,
    #[strum(serialize = "Pass Offside")]
    Offside,
    Unknown,
    #[strum(serialize = "Injury Clearance")]
    InjuryClearance,
    #[strum(disabled)]
    Other(String),
}

impl From<NameRef> for PassOutcome {
    fn from(name_ref: NameRef) -> Self {
        PassOutcome::from_str(&name_ref.name).unwrap_or(PassOutcome::Other(name_ref.name))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shot {
    pub outcome: Option<ShotOutcome>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pass {
    #[serde(default, deserialize_with = "lenient_location")]
    pub end_location: Option<Location>,

    /// The feed only records an outcome for passes that failed; `None` means the pass was completed.
    pub outcome: Option<PassOutcome>,
}
impl Pass {
    pub fn is_completed(&self) -> bool {
        self.outcome.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub team: Option<Team>,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<Location>,
    pub shot: Option<Shot>,
    pub pass: Option<Pass>,
}
impl Event {
    pub fn shot(team: &str, location: impl Into<Location>, outcome: ShotOutcome) -> Self {
        Self {
            event_type: EventType::Shot,
            team: Some(Team { name: team.into() }),
            location: Some(location.into()),
            shot: Some(Shot {
                outcome: Some(outcome),
            }),
            pass: None,
        }
    }

    pub fn pass(
        team: &str,
        location: impl Into<Location>,
        end_location: impl Into<Location>,
        outcome: Option<PassOutcome>,
    ) -> Self {
        Self {
            event_type: EventType::Pass,
            team: Some(Team { name: team.into() }),
            location: Some(location.into()),
            shot: None,
            pass: Some(Pass {
                end_location: Some(end_location.into()),
                outcome,
            }),
        }
    }

    pub fn is_by(&self, team_name: &str) -> bool {
        self.team
            .as_ref()
            .map(|team| team.is_named(team_name))
            .unwrap_or(false)
    }
}
