//! A dense, row-major matrix.

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}
impl<T: Default + Clone> Matrix<T> {
    pub fn allocate(rows: usize, cols: usize) -> Self {
        let (len, overflow) = rows.overflowing_mul(cols);
        assert!(!overflow, "allocation of a {rows}x{cols} matrix failed due to overflow");
        let data = vec![T::default(); len];
        Self { data, rows, cols }
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        debug_assert!(self.validate_row_index(row));
        let row_start = row * self.cols;
        &self.data[row_start..(row_start + self.cols)]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        debug_assert!(self.validate_row_index(row));
        let row_start = row * self.cols;
        &mut self.data[row_start..(row_start + self.cols)]
    }

    /// All cells in row-major order.
    pub fn flatten(&self) -> &[T] {
        &self.data
    }

    pub fn flatten_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn verbose(&self) -> VerboseFormat<T> {
        VerboseFormat { matrix: self }
    }

    fn validate_row_index(&self, row: usize) -> bool {
        assert!(row < self.rows, "invalid row index {row} for a {}x{} matrix", self.rows, self.cols);
        true
    }

    fn validate_col_index(&self, col: usize) -> bool {
        assert!(col < self.cols, "invalid column index {col} for a {}x{} matrix", self.rows, self.cols);
        true
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        debug_assert!(self.validate_row_index(row));
        debug_assert!(self.validate_col_index(col));
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        debug_assert!(self.validate_row_index(row));
        debug_assert!(self.validate_col_index(col));
        &mut self.data[row * self.cols + col]
    }
}

/// Renders one row per line, with cells separated by tabs.
pub struct VerboseFormat<'a, T> {
    matrix: &'a Matrix<T>,
}

impl<'a, T: Display> Display for VerboseFormat<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.matrix.rows() {
            let row_slice = self.matrix.row_slice(row);
            for (col, value) in row_slice.iter().enumerate() {
                if col > 0 {
                    write!(f, "\t")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
