//! # Vector sets
//!
//! Ordered collections of vectors of one dimension, such as the columns of a matrix or a basis of
//! a subspace.
use std::fmt;
use std::slice::Iter;

use itertools::Itertools;
use log::debug;

use crate::data::linear_algebra::matrix::elimination;
use crate::data::linear_algebra::matrix::square::SquareMatrix;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::solution::Solution;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Real;
use crate::error::{Axis, LinearAlgebraError, Result};

/// Non empty, all vectors have the same dimension. Independence is not required.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet<F> {
    vectors: Vec<Vector<F>>,
}

impl<F: Real> VectorSet<F> {
    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// A `Shape` error if there are no vectors, or if their dimensions differ.
    pub fn new(vectors: Vec<Vector<F>>) -> Result<Self> {
        let Some(first) = vectors.first() else {
            return Err(LinearAlgebraError::shape("a vector set needs at least one vector"));
        };
        let dimension = first.dimension();
        if let Some((i, vector)) = vectors.iter().enumerate().find(|(_, v)| v.dimension() != dimension) {
            return Err(LinearAlgebraError::shape(format!(
                "vector {i} has dimension {} while the first vector has dimension {dimension}",
                vector.dimension(),
            )));
        }

        Ok(Self { vectors })
    }

    pub(crate) fn new_unchecked(vectors: Vec<Vector<F>>) -> Self {
        debug_assert!(!vectors.is_empty());
        debug_assert!(vectors.iter().map(Vector::dimension).all_equal());

        Self { vectors }
    }

    /// The vector at index `i`.
    pub fn get(&self, i: usize) -> Result<&Vector<F>> {
        self.vectors.get(i)
            .ok_or(LinearAlgebraError::IndexOutOfRange { axis: Axis::Column, index: i, len: self.size() })
    }

    /// Number of vectors in the set.
    pub fn size(&self) -> usize {
        self.vectors.len()
    }

    /// Dimension shared by all vectors.
    pub fn dimension(&self) -> usize {
        self.vectors[0].dimension()
    }

    /// Iterate over the vectors in order.
    pub fn iter(&self) -> Iter<'_, Vector<F>> {
        self.vectors.iter()
    }

    /// Take the vectors out of this set.
    pub fn into_vectors(self) -> Vec<Vector<F>> {
        self.vectors
    }

    /// Matrix with the vectors as its columns.
    pub fn to_matrix(&self) -> Matrix<F> {
        Matrix::from_columns(self)
    }

    /// Matrix with the vectors as its columns, when there are as many vectors as their dimension.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` with the shape of `to_matrix` on the left and the square shape that was
    /// needed on the right.
    pub fn to_square_matrix(&self) -> Result<SquareMatrix<F>> {
        if self.size() != self.dimension() {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "a change of coordinates",
                left: (self.dimension(), self.size()),
                right: (self.dimension(), self.dimension()),
            });
        }

        SquareMatrix::try_from(self.to_matrix())
    }

    /// Whether no vector is a linear combination of the others.
    pub fn is_linearly_independent(&self) -> bool {
        self.to_matrix().null_space().is_empty()
    }

    /// The vectors at the pivot columns of `to_matrix`, spanning the same space.
    ///
    /// # Errors
    ///
    /// `ZeroVector` if all vectors are zero: the zero space has no basis to represent.
    pub fn basis(&self) -> Result<Self> {
        let pivots = elimination::forward(self.to_matrix()).pivots;
        if pivots.is_empty() {
            return Err(LinearAlgebraError::ZeroVector);
        }

        debug!("{} of {} vectors form a basis", pivots.len(), self.size());
        let vectors = pivots.iter()
            .map(|pivot| self.vectors[pivot.column].clone())
            .collect();
        Ok(Self::new_unchecked(vectors))
    }

    /// The unit vectors of the space that these vectors live in.
    pub fn standard_basis(&self) -> Result<Self> {
        Matrix::identity(self.dimension()).map(|identity| identity.to_vector_set())
    }

    /// Orthogonal basis of the span, with the Gram-Schmidt process.
    ///
    /// Each vector of `basis` has its projections on the previously computed vectors subtracted
    /// one at a time (the modified variant of the process). A remainder that is negligible
    /// relative to the vector it came from is rounding noise, and is left out.
    pub fn orthogonal_basis(&self) -> Result<Self> {
        let basis = self.basis()?;

        let mut orthogonal: Vec<Vector<F>> = Vec::with_capacity(basis.size());
        for (i, vector) in basis.vectors.into_iter().enumerate() {
            let scale = vector.norm();
            let mut remainder = vector;
            for previous in &orthogonal {
                let projection = remainder.projection_onto(previous)?;
                remainder = remainder.add(&projection.scale_with(-F::one()))?;
            }
            if remainder.norm().is_negligible_relative_to(scale) {
                debug!("basis vector {i} lies in the span of the vectors before it");
                continue;
            }
            orthogonal.push(remainder);
        }

        Ok(Self::new_unchecked(orthogonal))
    }

    /// Orthogonal basis of the span in which every vector has length one.
    pub fn orthonormal_basis(&self) -> Result<Self> {
        let vectors = self.orthogonal_basis()?
            .vectors
            .iter()
            .map(Vector::normalized)
            .collect::<Result<_>>()?;

        Ok(Self::new_unchecked(vectors))
    }

    /// Coordinates of `vector` relative to this set as a basis.
    ///
    /// # Return value
    ///
    /// The unique `x` such that `Bx = vector`, where `B` has the vectors of this set as columns.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if this set is not square or `vector` doesn't have the right dimension,
    /// `NotInvertible` if this set is not a basis.
    pub fn relative_coordinates_of(&self, vector: &Vector<F>) -> Result<Vector<F>> {
        let matrix = self.to_square_matrix()?;

        unique(matrix.solve(vector)?)
    }

    /// Coordinates of `vector` with the change of coordinates matrix between two bases.
    ///
    /// # Return value
    ///
    /// The unique `x` such that `(B⁻¹C)x = vector`, where `B` has the vectors of this set as
    /// columns, and `C` those of `other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if either set is not square or the sizes differ, `NotInvertible` if
    /// `B` is not invertible or the change of coordinates matrix is singular.
    pub fn relative_coordinates_between(&self, vector: &Vector<F>, other: &Self) -> Result<Vector<F>> {
        let from = self.to_square_matrix()?;
        let to = other.to_square_matrix()?;
        let change_of_coordinates = from.inverse()?.multiply_with(&to)?;

        unique(change_of_coordinates.solve(vector)?)
    }
}

fn unique<F: Real>(solution: Solution<F>) -> Result<Vector<F>> {
    solution.into_unique().ok_or(LinearAlgebraError::NotInvertible)
}

impl<F: Real> fmt::Display for VectorSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vectors = self.vectors.iter()
            .map(|vector| format!("({})", vector.iter().join(", ")))
            .join(", ");
        write!(f, "{{ {vectors} }}")
    }
}
