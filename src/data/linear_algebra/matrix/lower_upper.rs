//! # LU Decomposition
//!
//! Forward elimination on `[A | I]` turns `A` into an upper triangular `U` and the identity into
//! the product `E` of all elementary row operations applied, such that `EA = U`. Then `A = LU` with
//! `L = E⁻¹`.
use crate::data::linear_algebra::matrix::augmented::AugmentedMatrix;
use crate::data::linear_algebra::matrix::square::SquareMatrix;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::Real;
use crate::error::Result;

/// Factorization `A = LU`.
///
/// When elimination needed row swaps, `L` is a row permutation of a lower triangular matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct LUDecomposition<F> {
    lower: SquareMatrix<F>,
    upper: Matrix<F>,
}

impl<F: Real> LUDecomposition<F> {
    /// Compute the factorization of a matrix of any shape.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The matrix `A` to factorize, with `m` rows.
    ///
    /// # Return value
    ///
    /// An `m x m` matrix `L` and a matrix `U` in row echelon form of the same shape as `A`.
    pub fn compute(matrix: &Matrix<F>) -> Result<Self> {
        let identity = Matrix::identity(matrix.nr_rows())?;
        let augmented = AugmentedMatrix::new(matrix.clone(), identity)?;
        let (upper, operations) = augmented.echelon_form().into_parts();
        let lower = SquareMatrix::try_from(operations)?.inverse()?;

        Ok(Self { lower, upper })
    }

    /// The square factor `L`.
    pub fn lower(&self) -> &SquareMatrix<F> {
        &self.lower
    }

    /// The factor `U`, in row echelon form.
    pub fn upper(&self) -> &Matrix<F> {
        &self.upper
    }

    /// Split into the (`upper`, `lower`) pair.
    pub fn into_parts(self) -> (Matrix<F>, SquareMatrix<F>) {
        (self.upper, self.lower)
    }
}

impl<F: Real> Matrix<F> {
    /// Factorize this matrix as `LU`, see `LUDecomposition`.
    pub fn lu_factorization(&self) -> Result<LUDecomposition<F>> {
        LUDecomposition::compute(self)
    }
}
