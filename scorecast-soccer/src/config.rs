//! Tunable constants of the prediction pipeline.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boosts both sides' expectations when the venues are closer than `threshold`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerbyBoost {
    pub threshold: u32,
    pub multiplier: f64,
}

/// A travel band: a distance at or beyond `threshold` scales the away side's expectation by
/// `penalty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelBand {
    pub threshold: u32,
    pub penalty: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelBands {
    pub short: TravelBand,
    pub medium: TravelBand,
    pub long: TravelBand,
    pub very_long: TravelBand,
}
impl TravelBands {
    /// The bands from the longest to the shortest.
    pub fn descending(&self) -> [&TravelBand; 4] {
        [&self.very_long, &self.long, &self.medium, &self.short]
    }
}

impl Default for TravelBands {
    fn default() -> Self {
        Self {
            short: TravelBand {
                threshold: 50,
                penalty: 0.98,
            },
            medium: TravelBand {
                threshold: 100,
                penalty: 0.95,
            },
            long: TravelBand {
                threshold: 200,
                penalty: 0.92,
            },
            very_long: TravelBand {
                threshold: 300,
                penalty: 0.88,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Dixon-Coles correlation parameter; typically in the range -0.05 to -0.01.
    pub rho: f64,
    /// Samples drawn per side.
    pub simulations: usize,
    /// Number of goal buckets per side, covering `0..goal_range`.
    pub goal_range: u8,
    pub derby: DerbyBoost,
    pub travel: TravelBands,
    pub min_goals_floor: f64,
    pub max_goals_cap: f64,
    pub over_1p5_threshold: f64,
    pub over_2p5_threshold: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            rho: -0.03,
            simulations: 100_000,
            goal_range: 9,
            derby: DerbyBoost {
                threshold: 10,
                multiplier: 1.06,
            },
            travel: TravelBands::default(),
            min_goals_floor: 0.2,
            max_goals_cap: 5.0,
            over_1p5_threshold: 1.5,
            over_2p5_threshold: 2.5,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("number of simulations must be positive")]
    NoSimulations,

    #[error("goal range must be positive")]
    NoGoalRange,

    #[error("rho {0} lies outside [-1, 1]")]
    RhoOutOfBounds(f64),

    #[error("goals floor {floor} and cap {cap} must satisfy 0 ≤ floor ≤ cap")]
    GoalsBounds { floor: f64, cap: f64 },

    #[error("{name} multiplier {value} must be positive")]
    NonPositiveMultiplier { name: &'static str, value: f64 },

    #[error("travel thresholds must ascend from short to very long")]
    UnorderedTravelBands,

    #[error("over thresholds {0} and {1} must be finite")]
    OverThresholds(f64, f64),
}

pub const RHO_BOUNDS: RangeInclusive<f64> = -1.0..=1.0;

impl PredictionConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.simulations == 0 {
            return Err(InvalidConfig::NoSimulations);
        }
        if self.goal_range == 0 {
            return Err(InvalidConfig::NoGoalRange);
        }
        if !RHO_BOUNDS.contains(&self.rho) {
            return Err(InvalidConfig::RhoOutOfBounds(self.rho));
        }
        if !(self.min_goals_floor >= 0.0 && self.min_goals_floor <= self.max_goals_cap) {
            return Err(InvalidConfig::GoalsBounds {
                floor: self.min_goals_floor,
                cap: self.max_goals_cap,
            });
        }

        let multipliers = [
            ("derby", self.derby.multiplier),
            ("short travel", self.travel.short.penalty),
            ("medium travel", self.travel.medium.penalty),
            ("long travel", self.travel.long.penalty),
            ("very long travel", self.travel.very_long.penalty),
        ];
        for (name, value) in multipliers {
            if !(value > 0.0 && value.is_finite()) {
                return Err(InvalidConfig::NonPositiveMultiplier { name, value });
            }
        }

        let TravelBands {
            short,
            medium,
            long,
            very_long,
        } = &self.travel;
        if short.threshold > medium.threshold
            || medium.threshold > long.threshold
            || long.threshold > very_long.threshold
        {
            return Err(InvalidConfig::UnorderedTravelBands);
        }

        if !(self.over_1p5_threshold.is_finite() && self.over_2p5_threshold.is_finite()) {
            return Err(InvalidConfig::OverThresholds(
                self.over_1p5_threshold,
                self.over_2p5_threshold,
            ));
        }
        Ok(())
    }
}
