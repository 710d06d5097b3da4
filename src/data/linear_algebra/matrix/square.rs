//! # Square matrices
//!
//! Determinants and inverses, both computed with elimination.
use std::fmt;
use std::ops::Deref;

use log::debug;

use crate::data::linear_algebra::matrix::augmented::AugmentedMatrix;
use crate::data::linear_algebra::matrix::elimination::{self, Reduction};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::Real;
use crate::error::{LinearAlgebraError, Result};

/// A `Matrix` with as many rows as columns.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<F>(Matrix<F>);

impl<F: Real> SquareMatrix<F> {
    /// Create a `SquareMatrix` from rows of values.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self> {
        Self::try_from(Matrix::new(data)?)
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Result<Self> {
        Matrix::identity(len).map(Self)
    }

    /// Number of rows, equal to the number of columns.
    pub fn len(&self) -> usize {
        self.0.nr_rows()
    }

    /// Drop the guarantee of being square.
    pub fn into_matrix(self) -> Matrix<F> {
        self.0
    }

    /// Determinant, computed with forward elimination.
    ///
    /// The echelon form is upper triangular, so its determinant is the product of the diagonal.
    /// Each row swap flips the sign.
    pub fn determinant(&self) -> F {
        let Reduction { reduced, nr_swaps, .. } = elimination::forward(self.0.clone());

        let sign = if nr_swaps % 2 == 0 { F::one() } else { -F::one() };
        (0..self.len())
            .map(|i| reduced.value(i, i))
            .fold(sign, |product, value| product * value)
    }

    /// Determinant, computed with cofactor expansion along the first row.
    ///
    /// Exponential in the size of the matrix; use `determinant` unless you need an independent
    /// computation to compare with.
    pub fn determinant_by_cofactors(&self) -> F {
        cofactor_expansion(&self.0)
    }

    /// Inverse of this matrix, by row reducing `[A | I]`.
    ///
    /// # Errors
    ///
    /// `NotInvertible` if the left hand side does not reduce to the identity matrix, that is, if
    /// not every column has a pivot.
    pub fn inverse(&self) -> Result<Self> {
        let identity = Matrix::identity(self.len())?;
        let augmented = AugmentedMatrix::new(self.0.clone(), identity)?;
        let Reduction { reduced, pivots, .. } = augmented.reduce();

        if pivots.len() < self.len() {
            debug!("a {0} x {0} matrix has rank {1}", self.len(), pivots.len());
            return Err(LinearAlgebraError::NotInvertible);
        }

        Ok(Self(reduced.into_parts().1))
    }

    /// Sum of the diagonal values.
    pub fn trace(&self) -> F {
        (0..self.len()).map(|i| self.0.value(i, i)).sum()
    }

    /// Whether the diagonal values are one and all other values are zero, up to rounding.
    pub fn is_identity(&self) -> bool {
        self.0.rows()
            .enumerate()
            .all(|(i, row)| row.iter()
                .enumerate()
                .all(|(j, &value)| if i == j {
                    value.is_close_to(F::one())
                } else {
                    value.is_negligible()
                }))
    }
}

fn cofactor_expansion<F: Real>(matrix: &Matrix<F>) -> F {
    if matrix.nr_rows() == 1 {
        return matrix.value(0, 0);
    }

    (0..matrix.nr_columns())
        .map(|j| {
            let cofactor = cofactor_expansion(&matrix.without_row_and_column(0, j));
            let signed = if j % 2 == 0 { cofactor } else { -cofactor };
            matrix.value(0, j) * signed
        })
        .sum()
}

impl<F: Real> TryFrom<Matrix<F>> for SquareMatrix<F> {
    type Error = LinearAlgebraError;

    fn try_from(matrix: Matrix<F>) -> Result<Self> {
        if matrix.is_square() {
            Ok(Self(matrix))
        } else {
            Err(LinearAlgebraError::shape(format!(
                "a {:?} matrix is not square", matrix.shape(),
            )))
        }
    }
}

impl<F> From<SquareMatrix<F>> for Matrix<F> {
    fn from(square: SquareMatrix<F>) -> Self {
        square.0
    }
}

impl<F> Deref for SquareMatrix<F> {
    type Target = Matrix<F>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<F: fmt::Display> fmt::Display for SquareMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
