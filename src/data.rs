//! Loading of match listings and event streams from an open-data directory.
//!
//! The directory is laid out as follows:
//!
//! * `matches/{competition_id}/{season_id}.json` — the matches of one competition season;
//! * `events/{match_id}.json` — the ordered events of one match.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{Competition, Scope};
use crate::event::Event;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.into(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
        path: path.into(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeTeam {
    pub home_team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AwayTeam {
    pub away_team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Match {
    pub match_id: u64,
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
    pub home_team: HomeTeam,
    pub away_team: AwayTeam,
}
impl Match {
    pub fn is_home(&self, team: &str) -> bool {
        self.home_team.home_team_name.to_lowercase() == team.to_lowercase()
    }

    pub fn is_away(&self, team: &str) -> bool {
        self.away_team.away_team_name.to_lowercase() == team.to_lowercase()
    }

    pub fn involves(&self, team: &str, scope: Scope) -> bool {
        match scope {
            Scope::Home => self.is_home(team),
            Scope::Away => self.is_away(team),
            Scope::Both => self.is_home(team) || self.is_away(team),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvents {
    pub match_id: u64,
    pub events: Vec<Event>,
}

pub fn matches_path(dir: impl AsRef<Path>, competition: Competition) -> PathBuf {
    dir.as_ref()
        .join("matches")
        .join(competition.competition_id().to_string())
        .join(format!("{}.json", competition.season_id()))
}

pub fn events_path(dir: impl AsRef<Path>, match_id: u64) -> PathBuf {
    dir.as_ref().join("events").join(format!("{match_id}.json"))
}

pub fn read_matches(dir: impl AsRef<Path>, competition: Competition) -> Result<Vec<Match>, DataError> {
    let path = matches_path(dir, competition);
    debug!("reading matches from {}", path.display());
    read_json(path)
}

/// Retains the matches in which `team` played on the side(s) given by `scope`, ordered by match
/// date and then by id. Undated matches sort first.
pub fn select_matches(matches: Vec<Match>, team: &str, scope: Scope) -> Vec<Match> {
    let mut selected = matches
        .into_iter()
        .filter(|m| m.involves(team, scope))
        .collect::<Vec<_>>();
    selected.sort_by_key(|m| (m.match_date, m.match_id));
    selected
}

pub fn read_events(dir: impl AsRef<Path>, match_id: u64) -> Result<Vec<Event>, DataError> {
    let path = events_path(dir, match_id);
    debug!("reading events from {}", path.display());
    read_json(path)
}

pub fn read_match_events(dir: impl AsRef<Path>, matches: &[Match]) -> Result<Vec<MatchEvents>, DataError> {
    let dir = dir.as_ref();
    matches
        .iter()
        .map(|m| {
            Ok(MatchEvents {
                match_id: m.match_id,
                events: read_events(dir, m.match_id)?,
            })
        })
        .collect()
}
