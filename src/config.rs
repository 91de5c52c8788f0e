//! Run configuration. A [Config] is validated once, on construction, and is immutable thereafter.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("competition {0} not supported")]
    UnsupportedCompetition(String),

    #[error("scope {0} not supported; expected home, away or both")]
    UnsupportedScope(String),

    #[error("team name cannot be empty")]
    EmptyTeamName,

    #[error("team prefix must be supplied when taking both home and away results into account")]
    MissingTeamPrefix,

    #[error("team prefix '{0}' is not a valid identifier")]
    InvalidTeamPrefix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Competition {
    Epl,
    LaLiga,
    FifaWorldCup,
}
impl Competition {
    pub fn competition_id(&self) -> u32 {
        match self {
            Competition::Epl => 2,
            Competition::LaLiga => 11,
            Competition::FifaWorldCup => 43,
        }
    }

    pub fn season_id(&self) -> u32 {
        match self {
            Competition::Epl => 44,
            Competition::LaLiga => 42,
            Competition::FifaWorldCup => 3,
        }
    }
}

impl FromStr for Competition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epl" => Ok(Competition::Epl),
            "laliga" => Ok(Competition::LaLiga),
            "fifa world cup" => Ok(Competition::FifaWorldCup),
            _ => Err(ConfigError::UnsupportedCompetition(s.into())),
        }
    }
}

impl Display for Competition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Competition::Epl => write!(f, "EPL"),
            Competition::LaLiga => write!(f, "LaLiga"),
            Competition::FifaWorldCup => write!(f, "FIFA World Cup"),
        }
    }
}

/// Which side of each recorded match the team's events are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Scope {
    Home,
    Away,
    Both,
}
impl Scope {
    /// The prefix implied by a single-sided scope. [Scope::Both] implies none, since the team may
    /// appear on either side.
    pub fn default_team_prefix(&self) -> Option<&'static str> {
        match self {
            Scope::Home => Some("teamOne"),
            Scope::Away => Some("teamTwo"),
            Scope::Both => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    competition: Competition,
    team_name: String,
    scope: Scope,
    team_prefix: String,
}
impl Config {
    pub fn new(
        competition: Competition,
        team_name: impl Into<String>,
        scope: Scope,
        team_prefix: Option<String>,
    ) -> Result<Self, ConfigError> {
        let team_name = team_name.into();
        if team_name.trim().is_empty() {
            return Err(ConfigError::EmptyTeamName);
        }
        let team_prefix = match team_prefix {
            Some(team_prefix) => {
                if !is_identifier(&team_prefix) {
                    return Err(ConfigError::InvalidTeamPrefix(team_prefix));
                }
                team_prefix
            }
            None => scope
                .default_team_prefix()
                .ok_or(ConfigError::MissingTeamPrefix)?
                .into(),
        };
        Ok(Self {
            competition,
            team_name,
            scope,
            team_prefix,
        })
    }

    pub fn competition(&self) -> Competition {
        self.competition
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn team_prefix(&self) -> &str {
        &self.team_prefix
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Unvalidated settings, as supplied on the command line.
#[derive(Debug, Clone)]
pub struct Options {
    pub competition: String,
    pub team_name: String,
    pub scope: String,
    pub team_prefix: Option<String>,
}

impl TryFrom<Options> for Config {
    type Error = ConfigError;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        let competition = Competition::from_str(&options.competition)?;
        let scope = Scope::from_str(&options.scope)
            .map_err(|_| ConfigError::UnsupportedScope(options.scope.clone()))?;
        Config::new(competition, options.team_name, scope, options.team_prefix)
    }
}
