//! The joint distribution of home and away goals, indexed by `(home_goals, away_goals)`.

use scorecast::linear::matrix::Matrix;
use scorecast::poisson;
use scorecast::probs::{col_sums, row_sums, SliceExt};

use crate::domain::{Score, Side};

/// Builds the Dixon-Coles-corrected scoregrid from the empirical goal distributions of each side.
/// The correction uses the scoring rates rather than the histograms.
pub fn build(
    home_histogram: &[f64],
    away_histogram: &[f64],
    lambda_home: f64,
    lambda_away: f64,
    rho: f64,
) -> Matrix<f64> {
    let mut scoregrid = Matrix::allocate(home_histogram.len(), away_histogram.len());
    from_outer_product(home_histogram, away_histogram, &mut scoregrid);
    apply_dixon_coles(lambda_home, lambda_away, rho, &mut scoregrid);
    renormalise(&mut scoregrid);
    scoregrid
}

/// Populates the scoregrid on the assumption that home and away goals are independent.
pub fn from_outer_product(home_probs: &[f64], away_probs: &[f64], scoregrid: &mut Matrix<f64>) {
    debug_assert_eq!(home_probs.len(), scoregrid.rows());
    debug_assert_eq!(away_probs.len(), scoregrid.cols());
    for (home_goals, &home_prob) in home_probs.iter().enumerate() {
        let row_slice = scoregrid.row_slice_mut(home_goals);
        for (away_goals, &away_prob) in away_probs.iter().enumerate() {
            row_slice[away_goals] = home_prob * away_prob;
        }
    }
}

/// The analytic counterpart of a simulated grid, from independent Poisson goal counts.
pub fn from_univariate_poisson(home_rate: f64, away_rate: f64, scoregrid: &mut Matrix<f64>) {
    let home_probs = poisson::univariate_series(scoregrid.rows(), home_rate);
    let away_probs = poisson::univariate_series(scoregrid.cols(), away_rate);
    from_outer_product(&home_probs, &away_probs, scoregrid);
}

/// The Dixon-Coles adjustment factor τ for a given score. Only 0-0, 1-0, 0-1 and 1-1 are
/// adjusted; τ is 1 everywhere else.
#[inline]
pub fn dixon_coles_tau(
    home_goals: usize,
    away_goals: usize,
    lambda_home: f64,
    lambda_away: f64,
    rho: f64,
) -> f64 {
    match (home_goals, away_goals) {
        (0, 0) => 1.0 - lambda_home * lambda_away * rho,
        (1, 0) => 1.0 + lambda_away * rho,
        (0, 1) => 1.0 + lambda_home * rho,
        (1, 1) => 1.0 - rho,
        _ => 1.0,
    }
}

/// Scales the four low-scoring cells by τ, flooring each at zero since τ turns negative for
/// large rates and strong correlation. A grid narrower than 2×2 is left as is. The grid is no
/// longer a distribution afterwards; see [renormalise].
pub fn apply_dixon_coles(lambda_home: f64, lambda_away: f64, rho: f64, scoregrid: &mut Matrix<f64>) {
    if scoregrid.rows() < 2 || scoregrid.cols() < 2 {
        return;
    }
    for home_goals in 0..2 {
        for away_goals in 0..2 {
            let tau = dixon_coles_tau(home_goals, away_goals, lambda_home, lambda_away, rho);
            let cell = &mut scoregrid[(home_goals, away_goals)];
            *cell = f64::max(0.0, *cell * tau);
        }
    }
}

/// Rescales the grid to sum to 1, returning the sum prior to rescaling. An all-zero grid is
/// left unchanged.
pub fn renormalise(scoregrid: &mut Matrix<f64>) -> f64 {
    scoregrid.flatten_mut().normalise(1.0)
}

/// Distribution of the given side's goals, summed over the other side's goals.
pub fn marginal(side: Side, scoregrid: &Matrix<f64>) -> Vec<f64> {
    match side {
        Side::Home => row_sums(scoregrid),
        Side::Away => col_sums(scoregrid),
    }
}

pub fn home_away_expectations(scoregrid: &Matrix<f64>) -> (f64, f64) {
    let (mut home_expectation, mut away_expectation) = (0.0, 0.0);

    for home_goals in 0..scoregrid.rows() {
        for away_goals in 0..scoregrid.cols() {
            let prob = scoregrid[(home_goals, away_goals)];
            home_expectation += home_goals as f64 * prob;
            away_expectation += away_goals as f64 * prob;
        }
    }

    (home_expectation, away_expectation)
}

/// The single most probable cell. Ties resolve to the earliest cell in row-major order.
pub fn most_probable_score(scoregrid: &Matrix<f64>) -> Option<(Score, f64)> {
    let index = scoregrid.flatten().argmax()?;
    let (home_goals, away_goals) = (index / scoregrid.cols(), index % scoregrid.cols());
    Some((
        Score::new(home_goals as u8, away_goals as u8),
        scoregrid[(home_goals, away_goals)],
    ))
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    Under(u8),
    Over(u8),
    Score(Score),
}
impl Outcome {
    pub fn gather(&self, scoregrid: &Matrix<f64>) -> f64 {
        match self {
            Outcome::Win(side) => Self::gather_win(side, scoregrid),
            Outcome::Draw => Self::gather_draw(scoregrid),
            Outcome::Under(goals) => Self::gather_goals_under(*goals, scoregrid),
            Outcome::Over(goals) => Self::gather_goals_over(*goals, scoregrid),
            Outcome::Score(score) => Self::gather_correct_score(score, scoregrid),
        }
    }

    fn gather_win(side: &Side, scoregrid: &Matrix<f64>) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for row in 1..scoregrid.rows() {
                    for col in 0..usize::min(row, scoregrid.cols()) {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
            Side::Away => {
                for col in 1..scoregrid.cols() {
                    for row in 0..usize::min(col, scoregrid.rows()) {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
        }
        prob
    }

    fn gather_draw(scoregrid: &Matrix<f64>) -> f64 {
        let mut prob = 0.0;
        for index in 0..usize::min(scoregrid.rows(), scoregrid.cols()) {
            prob += scoregrid[(index, index)];
        }
        prob
    }

    fn gather_goals_over(goals: u8, scoregrid: &Matrix<f64>) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for row in 0..scoregrid.rows() {
            for col in 0..scoregrid.cols() {
                if row + col > goals {
                    prob += scoregrid[(row, col)];
                }
            }
        }
        prob
    }

    fn gather_goals_under(goals: u8, scoregrid: &Matrix<f64>) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for row in 0..scoregrid.rows() {
            for col in 0..scoregrid.cols() {
                if row + col < goals {
                    prob += scoregrid[(row, col)];
                }
            }
        }
        prob
    }

    fn gather_correct_score(score: &Score, scoregrid: &Matrix<f64>) -> f64 {
        if (score.home as usize) < scoregrid.rows() && (score.away as usize) < scoregrid.cols() {
            scoregrid[(score.home as usize, score.away as usize)]
        } else {
            0.0
        }
    }
}
