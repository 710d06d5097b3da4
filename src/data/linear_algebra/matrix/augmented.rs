//! # Augmented matrices
//!
//! Two matrices with the same number of rows, to which every row operation is applied in lock
//! step. Row reducing `[A | b]` solves `Ax = b`, row reducing `[A | I]` inverts `A`.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_algebra::matrix::elimination::{self, Reduction, RowOperations};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::Real;
use crate::error::{LinearAlgebraError, Result};

/// A `left` matrix, whose values determine the pivots, and a `right` matrix that gets transformed
/// along.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedMatrix<F> {
    left: Matrix<F>,
    right: Matrix<F>,
}

impl<F: Real> AugmentedMatrix<F> {
    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// A `Shape` error if the matrices don't have the same number of rows.
    pub fn new(left: Matrix<F>, right: Matrix<F>) -> Result<Self> {
        if left.nr_rows() != right.nr_rows() {
            return Err(LinearAlgebraError::shape(format!(
                "can't augment a matrix with {} rows with one with {} rows",
                left.nr_rows(), right.nr_rows(),
            )));
        }

        Ok(Self { left, right })
    }

    /// Matrix on the left of the bar.
    pub fn left(&self) -> &Matrix<F> {
        &self.left
    }

    /// Matrix on the right of the bar.
    pub fn right(&self) -> &Matrix<F> {
        &self.right
    }

    /// Split into the (`left`, `right`) pair.
    pub fn into_parts(self) -> (Matrix<F>, Matrix<F>) {
        (self.left, self.right)
    }

    /// Number of rows, shared by both sides.
    pub fn nr_rows(&self) -> usize {
        self.left.nr_rows()
    }

    /// Multiply row `row` of both matrices with `factor`.
    pub fn scale_row_with(&self, row: usize, factor: F) -> Result<Self> {
        self.left.check_row(row)?;

        Ok(self.clone().multiply_row(row, factor))
    }

    /// Swap rows `first` and `second` in both matrices.
    pub fn interchange_rows(&self, first: usize, second: usize) -> Result<Self> {
        self.left.check_row(first)?;
        self.left.check_row(second)?;

        Ok(self.clone().swap_rows(first, second))
    }

    /// Add `factor` times row `read_row` to row `write_row` in both matrices.
    pub fn add_row_to(&self, read_row: usize, write_row: usize, factor: F) -> Result<Self> {
        self.left.check_row(read_row)?;
        self.left.check_row(write_row)?;

        Ok(self.clone().mul_add_rows(read_row, write_row, factor))
    }

    /// Row echelon form of the left matrix, with the right matrix transformed along.
    pub fn echelon_form(&self) -> Self {
        elimination::forward(self.clone()).reduced
    }

    /// Reduced row echelon form of the left matrix, with the right matrix transformed along.
    pub fn row_reduced_echelon_form(&self) -> Self {
        self.reduce().reduced
    }

    pub(crate) fn reduce(&self) -> Reduction<Self> {
        elimination::reduce(self.clone())
    }
}

impl<F: Real> RowOperations<F> for AugmentedMatrix<F> {
    fn lead(&self) -> &Matrix<F> {
        &self.left
    }

    fn multiply_row(self, row: usize, factor: F) -> Self {
        Self {
            left: self.left.multiply_row(row, factor),
            right: self.right.multiply_row(row, factor),
        }
    }

    fn swap_rows(self, first: usize, second: usize) -> Self {
        Self {
            left: self.left.swap_rows(first, second),
            right: self.right.swap_rows(first, second),
        }
    }

    fn mul_add_rows(self, read_row: usize, write_row: usize, factor: F) -> Self {
        Self {
            left: self.left.mul_add_rows(read_row, write_row, factor),
            right: self.right.mul_add_rows(read_row, write_row, factor),
        }
    }

    fn settle_lead(self, row: usize, column: usize, value: F) -> Self {
        Self {
            left: self.left.settle_lead(row, column, value),
            right: self.right,
        }
    }
}

impl<F: fmt::Display> fmt::Display for AugmentedMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (left, right) in self.left.data.iter().zip(&self.right.data) {
            writeln!(f, "[ {} | {} ]", left.iter().join(" "), right.iter().join(" "))?;
        }

        Ok(())
    }
}
