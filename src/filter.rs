//! Selection of events by type and by team membership.

use tracing::trace;

use crate::event::{Event, EventType};

/// Which team an event is attributed to, relative to the team under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Events by the team under analysis.
    For,

    /// Events by anyone else, including events with no recorded team.
    Against,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    Type { event_type: EventType },
    Team { name: &'a str, side: Side },
}
impl<'a> Predicate<'a> {
    pub fn test(&self, event: &Event) -> bool {
        match self {
            Predicate::Type { event_type } => &event.event_type == event_type,
            Predicate::Team { name, side } => match side {
                Side::For => event.is_by(name),
                Side::Against => !event.is_by(name),
            },
        }
    }
}

/// Events satisfying every one of the `predicates`, in their original order.
pub fn filter<'e>(
    events: impl IntoIterator<Item = &'e Event>,
    predicates: &[Predicate],
) -> Vec<&'e Event> {
    events
        .into_iter()
        .filter(|event| predicates.iter().all(|predicate| predicate.test(event)))
        .collect()
}

/// Events of the given type attributed to `side` relative to `team`.
pub fn filter_by<'e>(
    events: impl IntoIterator<Item = &'e Event>,
    event_type: EventType,
    team: &str,
    side: Side,
) -> Vec<&'e Event> {
    filter(
        events,
        &[
            Predicate::Type { event_type },
            Predicate::Team { name: team, side },
        ],
    )
}

/// The four event slices that feed zone statistics for a single team.
#[derive(Debug, Default)]
pub struct Slices<'e> {
    pub shots_for: Vec<&'e Event>,
    pub shots_against: Vec<&'e Event>,
    pub passes_for: Vec<&'e Event>,
    pub passes_against: Vec<&'e Event>,
}
impl<'e> Slices<'e> {
    /// Splits `events` into the four slices with [filter_by]. Events that are neither shots nor
    /// passes are ignored.
    pub fn partition(events: impl IntoIterator<Item = &'e Event>, team: &str) -> Self {
        let events = events.into_iter().collect::<Vec<_>>();
        let slices = Slices {
            shots_for: filter_by(events.iter().copied(), EventType::Shot, team, Side::For),
            shots_against: filter_by(events.iter().copied(), EventType::Shot, team, Side::Against),
            passes_for: filter_by(events.iter().copied(), EventType::Pass, team, Side::For),
            passes_against: filter_by(events.iter().copied(), EventType::Pass, team, Side::Against),
        };
        trace!(
            "ignored {} events that are neither shots nor passes",
            events.len() - slices.len()
        );
        slices
    }

    /// Total number of events across the four slices.
    pub fn len(&self) -> usize {
        self.shots_for.len() + self.shots_against.len() + self.passes_for.len() + self.passes_against.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
