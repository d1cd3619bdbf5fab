use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }
}

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Side {
    Home,
    Away,
}
impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Scoring and conceding ratings of a team, split by venue. A defence rating measures weakness:
/// the higher it is, the more the team concedes. League-average scoring is already folded in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStrengths {
    pub home_attack: f64,
    pub away_attack: f64,
    pub home_defence: f64,
    pub away_defence: f64,
}
impl TeamStrengths {
    pub fn attack(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_attack,
            Side::Away => self.away_attack,
        }
    }

    pub fn defence(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_defence,
            Side::Away => self.away_defence,
        }
    }
}

/// Distance between the two teams' home venues (the "poke"). Any non-positive raw distance
/// denotes that the distance is unavailable.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum TravelDistance {
    #[default]
    Unknown,
    Known(u32),
}
impl TravelDistance {
    pub fn known(&self) -> Option<u32> {
        match self {
            TravelDistance::Unknown => None,
            TravelDistance::Known(distance) => Some(*distance),
        }
    }
}

impl From<i64> for TravelDistance {
    fn from(raw: i64) -> Self {
        if raw <= 0 {
            TravelDistance::Unknown
        } else {
            TravelDistance::Known(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }
}

impl From<Option<i64>> for TravelDistance {
    fn from(raw: Option<i64>) -> Self {
        raw.map(TravelDistance::from).unwrap_or_default()
    }
}

impl From<TravelDistance> for Option<i64> {
    fn from(distance: TravelDistance) -> Self {
        distance.known().map(i64::from)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    #[serde(default)]
    pub travel_distance: TravelDistance,
}

/// A single match to predict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub name: Option<String>,
    pub home: TeamStrengths,
    pub away: TeamStrengths,
    #[serde(default)]
    pub context: MatchContext,
}
impl Fixture {
    pub fn strengths(&self, side: Side) -> &TeamStrengths {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}
