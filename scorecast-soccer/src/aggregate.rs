//! Reduction of a scoregrid and raw samples into headline outcome probabilities.

use scorecast::linear::matrix::Matrix;
use scorecast::probs::SliceExt;

use crate::domain::{Score, Side};
use crate::scoregrid;
use crate::scoregrid::Outcome;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHead {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}
impl HeadToHead {
    pub fn gather(scoregrid: &Matrix<f64>) -> Self {
        Self {
            home_win: Outcome::Win(Side::Home).gather(scoregrid),
            draw: Outcome::Draw.gather(scoregrid),
            away_win: Outcome::Win(Side::Away).gather(scoregrid),
        }
    }

    pub fn sum(&self) -> f64 {
        self.home_win + self.draw + self.away_win
    }
}

/// The most likely goal count for `side`, taken from that side's marginal distribution. The
/// lowest count wins a tie.
pub fn most_likely_goals(side: Side, scoregrid: &Matrix<f64>) -> u8 {
    scoregrid::marginal(side, scoregrid)
        .argmax()
        .map(|goals| goals as u8)
        .unwrap_or(0)
}

/// Pairs each side's most likely goal count. Because the two marginals are maximised
/// separately, the pair need not be the most probable cell of the grid.
pub fn predicted_score(scoregrid: &Matrix<f64>) -> Score {
    Score::new(
        most_likely_goals(Side::Home, scoregrid),
        most_likely_goals(Side::Away, scoregrid),
    )
}

/// Fraction of simulated matches whose total goals strictly exceed `threshold`. The i-th home
/// sample is paired with the i-th away sample; unpaired samples are ignored.
pub fn over_probability(home_samples: &[u16], away_samples: &[u16], threshold: f64) -> f64 {
    debug_assert_eq!(home_samples.len(), away_samples.len());
    let matches = usize::min(home_samples.len(), away_samples.len());
    if matches == 0 {
        return 0.0;
    }
    let overs = home_samples
        .iter()
        .zip(away_samples)
        .filter(|&(&home_goals, &away_goals)| {
            (home_goals as u32 + away_goals as u32) as f64 > threshold
        })
        .count();
    overs as f64 / matches as f64
}
