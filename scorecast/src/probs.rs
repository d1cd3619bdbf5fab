//! Utilities for working with probabilities.

use crate::linear::matrix::Matrix;

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
    fn argmax(&self) -> Option<usize>;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Scales the elements so that they add up to `target`, returning the sum prior to scaling.
    /// A slice that sums to zero is left untouched.
    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        if sum > 0.0 {
            self.scale(target / sum);
        }
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    /// Index of the greatest element. Only a strictly greater element displaces the incumbent,
    /// so the lowest index wins a tie.
    fn argmax(&self) -> Option<usize> {
        let mut max: Option<(usize, f64)> = None;
        for (index, &value) in self.iter().enumerate() {
            match max {
                Some((_, max_value)) if value <= max_value => {}
                _ => max = Some((index, value)),
            }
        }
        max.map(|(index, _)| index)
    }
}

/// Sums each row of `matrix`.
pub fn row_sums(matrix: &Matrix<f64>) -> Vec<f64> {
    (0..matrix.rows())
        .map(|row| matrix.row_slice(row).sum())
        .collect()
}

/// Sums each column of `matrix`.
pub fn col_sums(matrix: &Matrix<f64>) -> Vec<f64> {
    let mut sums = vec![0.0; matrix.cols()];
    for row in 0..matrix.rows() {
        for (col, &value) in matrix.row_slice(row).iter().enumerate() {
            sums[col] += value;
        }
    }
    sums
}
