//! The prediction pipeline: expected goals, Poisson sampling, empirical histograms, the corrected
//! scoregrid and, finally, the headline outcome probabilities.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tinyrand::{Rand, Seeded, StdRand};
use tracing::debug;

use scorecast::linear::matrix::Matrix;
use scorecast::poisson;
use scorecast::random;
use scorecast::timed::Timed;

use crate::aggregate;
use crate::aggregate::HeadToHead;
use crate::config::{InvalidConfig, PredictionConfig};
use crate::domain::{Fixture, Score};
use crate::expectation::Expectations;
use crate::histogram;
use crate::scoregrid;

/// Probabilities are expressed as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub lambda_home: f64,
    pub lambda_away: f64,
    pub predicted_home_goals: u8,
    pub predicted_away_goals: u8,
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    pub over_1p5: f64,
    pub over_2p5: f64,
}
impl PredictionResult {
    pub fn predicted_score(&self) -> Score {
        Score::new(self.predicted_home_goals, self.predicted_away_goals)
    }
}

/// Everything produced by one run of the pipeline, prior to summarising.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub expectations: Expectations,
    pub home_samples: Vec<u16>,
    pub away_samples: Vec<u16>,
    pub home_histogram: Vec<f64>,
    pub away_histogram: Vec<f64>,
    pub scoregrid: Matrix<f64>,
}
impl Simulation {
    pub fn summarise(&self, config: &PredictionConfig) -> PredictionResult {
        let h2h = HeadToHead::gather(&self.scoregrid);
        let predicted_score = aggregate::predicted_score(&self.scoregrid);
        let over = |threshold| {
            aggregate::over_probability(&self.home_samples, &self.away_samples, threshold)
        };
        PredictionResult {
            lambda_home: self.expectations.home,
            lambda_away: self.expectations.away,
            predicted_home_goals: predicted_score.home,
            predicted_away_goals: predicted_score.away,
            home_win: h2h.home_win * 100.0,
            draw: h2h.draw * 100.0,
            away_win: h2h.away_win * 100.0,
            over_1p5: over(config.over_1p5_threshold) * 100.0,
            over_2p5: over(config.over_2p5_threshold) * 100.0,
        }
    }
}

#[derive(Debug)]
pub struct Predictor {
    config: PredictionConfig,
}
impl Predictor {
    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    pub fn simulate(&self, fixture: &Fixture, rand: &mut impl Rand) -> Simulation {
        let expectations = Expectations::derive(fixture, &self.config);
        debug!(
            "{}: λ home {:.3}, away {:.3}",
            fixture.name.as_deref().unwrap_or("fixture"),
            expectations.home,
            expectations.away
        );
        self.simulate_expectations(expectations, rand)
    }

    /// Runs the pipeline from already-derived expectations.
    pub fn simulate_expectations(
        &self,
        expectations: Expectations,
        rand: &mut impl Rand,
    ) -> Simulation {
        let simulations = self.config.simulations;
        let goal_range = self.config.goal_range as usize;
        let home_samples = poisson::sample(expectations.home, simulations, rand);
        let away_samples = poisson::sample(expectations.away, simulations, rand);
        let home_histogram = histogram::from_samples(&home_samples, goal_range);
        let away_histogram = histogram::from_samples(&away_samples, goal_range);
        debug!(
            "mass beyond {goal_range} goals: home {:.4}, away {:.4}",
            histogram::excluded_mass(&home_histogram),
            histogram::excluded_mass(&away_histogram)
        );
        let scoregrid = scoregrid::build(
            &home_histogram,
            &away_histogram,
            expectations.home,
            expectations.away,
            self.config.rho,
        );
        Simulation {
            expectations,
            home_samples,
            away_samples,
            home_histogram,
            away_histogram,
            scoregrid,
        }
    }

    pub fn predict(&self, fixture: &Fixture, rand: &mut impl Rand) -> PredictionResult {
        let timed = Timed::value(|| self.simulate(fixture, rand).summarise(&self.config));
        debug!("prediction took {:?}: {:?}", timed.elapsed, timed.value);
        timed.value
    }

    /// A reproducible prediction, drawing from a generator seeded with `seed`.
    pub fn predict_seeded(&self, fixture: &Fixture, seed: u64) -> PredictionResult {
        self.predict(fixture, &mut StdRand::seed(seed))
    }

    /// Predicts each fixture in parallel. The fixture at `index` is predicted as if by
    /// `predict_seeded(fixture, fixture_seed(seed, index))`, so the outcome does not depend on
    /// the number of threads.
    pub fn predict_batch(&self, fixtures: &[Fixture], seed: u64) -> Vec<PredictionResult> {
        let timed = Timed::value(|| {
            fixtures
                .par_iter()
                .enumerate()
                .map(|(index, fixture)| self.predict_seeded(fixture, fixture_seed(seed, index)))
                .collect::<Vec<_>>()
        });
        debug!(
            "predicted {} fixtures in {:?}",
            fixtures.len(),
            timed.elapsed
        );
        timed.value
    }
}

impl TryFrom<PredictionConfig> for Predictor {
    type Error = InvalidConfig;

    fn try_from(config: PredictionConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// The seed used for the fixture at `index` within a batch.
pub fn fixture_seed(seed: u64, index: usize) -> u64 {
    random::derive_seed(seed, index as u64)
}
