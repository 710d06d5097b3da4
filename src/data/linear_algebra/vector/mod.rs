//! # Vectors
//!
//! A `Vector` is a matrix with a single column. It converts to and from such a matrix whenever it
//! needs to take part in an elimination; on its own it offers the operations of an inner product
//! space.
use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use approx::{AbsDiffEq, RelativeEq};

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::set::VectorSet;
use crate::data::number_types::Real;
use crate::error::{Axis, LinearAlgebraError, Result};

pub mod set;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation and at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<F> {
    data: Vec<F>,
}

impl<F: Real> Vector<F> {
    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// A `Shape` error if `data` is empty.
    pub fn new(data: Vec<F>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinearAlgebraError::shape("a vector needs at least one value"));
        }

        Ok(Self { data })
    }

    pub(crate) fn new_unchecked(data: Vec<F>) -> Self {
        debug_assert!(!data.is_empty());

        Self { data }
    }

    /// Create a vector of zeros of length `len`.
    pub fn zeros(len: usize) -> Result<Self> {
        Self::new(vec![F::zero(); len])
    }

    /// Get the value at index `i`.
    pub fn get(&self, i: usize) -> Result<F> {
        self.data.get(i)
            .copied()
            .ok_or(LinearAlgebraError::IndexOutOfRange { axis: Axis::Row, index: i, len: self.data.len() })
    }

    /// Number of values in this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// All values, in order.
    pub fn entries(&self) -> &[F] {
        &self.data
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Take the values out of this vector.
    pub fn into_entries(self) -> Vec<F> {
        self.data
    }

    /// Single column matrix with the values of this vector.
    pub fn to_matrix(&self) -> Matrix<F> {
        Matrix::from(self)
    }

    /// Whether all values are zero.
    ///
    /// There is no tolerance: a vector has no scale to compare its own values with.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&value| value == F::zero())
    }

    /// Largest absolute value.
    pub fn max_abs_value(&self) -> F {
        self.data.iter().fold(F::zero(), |max, value| max.max(value.abs()))
    }

    /// Multiply every value with `factor`.
    pub fn scale_with(&self, factor: F) -> Self {
        Self { data: self.data.iter().map(|&value| factor * value).collect() }
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other, "addition")?;

        Ok(Self {
            data: self.data.iter().zip(&other.data).map(|(&value, &other_value)| value + other_value).collect(),
        })
    }

    /// Standard inner product.
    pub fn inner_product_with(&self, other: &Self) -> Result<F> {
        self.check_dimension(other, "an inner product")?;

        Ok(self.data.iter().zip(&other.data).map(|(&value, &other_value)| value * other_value).sum())
    }

    /// Euclidean length.
    pub fn norm(&self) -> F {
        self.data.iter().map(|&value| value * value).sum::<F>().sqrt()
    }

    /// This vector scaled to length one.
    ///
    /// # Errors
    ///
    /// `ZeroVector` if this is the zero vector, or so close to it that the length underflows.
    pub fn normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == F::zero() {
            return Err(LinearAlgebraError::ZeroVector);
        }

        Ok(self.scale_with(norm.recip()))
    }

    /// Whether the inner product with `other` is zero, up to rounding.
    ///
    /// The inner product is compared with the product of the lengths, which bounds it.
    pub fn is_orthogonal_with(&self, other: &Self) -> Result<bool> {
        let inner_product = self.inner_product_with(other)?;

        Ok(inner_product.is_negligible_relative_to(self.norm() * other.norm()))
    }

    /// Whether both vectors are orthogonal and of length one, up to rounding.
    pub fn is_orthonormal_with(&self, other: &Self) -> Result<bool> {
        Ok(self.is_orthogonal_with(other)? &&
            self.norm().is_close_to(F::one()) &&
            other.norm().is_close_to(F::one()))
    }

    /// Orthogonal projection of this vector onto the line spanned by `other`.
    ///
    /// # Return value
    ///
    /// `(⟨self, other⟩ / ⟨other, other⟩) · other`
    ///
    /// # Errors
    ///
    /// `ZeroVector` if `other` is the zero vector, `DimensionMismatch` if the dimensions differ.
    pub fn projection_onto(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other, "a projection")?;
        let length_squared = other.inner_product_with(other)?;
        if length_squared == F::zero() {
            return Err(LinearAlgebraError::ZeroVector);
        }

        let coefficient = self.inner_product_with(other)? / length_squared;
        Ok(other.scale_with(coefficient))
    }

    /// Sum of the projections onto each of the vectors in a set.
    ///
    /// This is the orthogonal projection onto the span of the set only if the set is orthogonal.
    pub fn projection_onto_set(&self, set: &VectorSet<F>) -> Result<Self> {
        set.iter()
            .map(|vector| self.projection_onto(vector))
            .try_fold(Self::zeros(self.dimension())?, |total, projection| total.add(&projection?))
    }

    fn check_dimension(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(LinearAlgebraError::DimensionMismatch {
                operation,
                left: (self.dimension(), 1),
                right: (other.dimension(), 1),
            })
        }
    }
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.data.len());

        &self.data[index]
    }
}

impl<F: Real> TryFrom<Matrix<F>> for Vector<F> {
    type Error = LinearAlgebraError;

    fn try_from(matrix: Matrix<F>) -> Result<Self> {
        matrix.to_vector()
    }
}

impl<F: Real> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_matrix(), f)
    }
}

impl<F: Real> AbsDiffEq for Vector<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data.len() == other.data.len() &&
            self.data.iter().zip(&other.data).all(|(value, other_value)| value.abs_diff_eq(other_value, epsilon))
    }
}

impl<F: Real> RelativeEq for Vector<F> {
    fn default_max_relative() -> Self::Epsilon {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data.len() == other.data.len() &&
            self.data.iter()
                .zip(&other.data)
                .all(|(value, other_value)| value.relative_eq(other_value, epsilon, max_relative))
    }
}
