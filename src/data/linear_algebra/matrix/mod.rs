//! # Dense matrices
//!
//! A `Matrix` is an immutable rectangular grid of values. Every operation that "changes" a matrix
//! returns a new instance; nothing hands out a mutable view of the internal rows.
//!
//! The row reduction algorithms are written once, in the `elimination` module, against the
//! `RowOperations` trait. Both `Matrix` and `AugmentedMatrix` implement it.
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;

use crate::data::linear_algebra::matrix::elimination::{Reduction, RowOperations};
use crate::data::linear_algebra::matrix::square::SquareMatrix;
use crate::data::linear_algebra::vector::set::VectorSet;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Real;
use crate::error::{Axis, LinearAlgebraError, Result};

pub mod augmented;
pub mod elimination;
pub mod lower_upper;
pub mod square;

/// Uses a row major `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> Matrix<F> {
    /// Create a `Matrix` from rows of values.
    ///
    /// # Errors
    ///
    /// A `Shape` error if there are no rows, the first row is empty, or the rows are not of equal
    /// length.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self> {
        let (nr_rows, nr_columns) = get_data_dimensions(&data)?;

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Result<Self> {
        if nr_rows == 0 || nr_columns == 0 {
            return Err(LinearAlgebraError::shape(format!(
                "a {nr_rows} x {nr_columns} matrix has no values",
            )));
        }

        Ok(Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        })
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Result<Self> {
        let mut matrix = Self::zeros(len, len)?;
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        Ok(matrix)
    }

    /// Create a matrix that has the vectors of a set as its columns, in order.
    pub fn from_columns(columns: &VectorSet<F>) -> Self {
        let nr_rows = columns.dimension();
        let data = (0..nr_rows)
            .map(|i| columns.iter().map(|column| column[i]).collect())
            .collect();

        Self { data, nr_rows, nr_columns: columns.size() }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of rows and number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Get the number of values in this matrix.
    pub fn dimension(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    /// Whether there are as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    /// Get the value at coordinate (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> Result<F> {
        self.check_row(row)?;
        self.check_column(column)?;

        Ok(self.data[row][column])
    }

    /// Copy of this matrix with the value at coordinate (`row`, `column`) replaced by `value`.
    pub fn set(&self, row: usize, column: usize, value: F) -> Result<Self> {
        self.check_row(row)?;
        self.check_column(column)?;

        let mut result = self.clone();
        result.data[row][column] = value;
        Ok(result)
    }

    /// Get a copy of all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Result<Vec<F>> {
        self.check_row(i)?;

        Ok(self.data[i].clone())
    }

    /// Get a copy of all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Result<Vec<F>> {
        self.check_column(j)?;

        Ok(self.column_values(j))
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item=&[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Value at coordinate (`i`, `j`), for callers that already know the indices to be valid.
    pub(crate) fn value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    fn column_values(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i < self.nr_rows {
            Ok(())
        } else {
            Err(LinearAlgebraError::IndexOutOfRange { axis: Axis::Row, index: i, len: self.nr_rows })
        }
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j < self.nr_columns {
            Ok(())
        } else {
            Err(LinearAlgebraError::IndexOutOfRange {
                axis: Axis::Column,
                index: j,
                len: self.nr_columns,
            })
        }
    }

    fn check_same_shape(&self, other: &Self, operation: &str) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(LinearAlgebraError::shape(format!(
                "{operation} needs equally shaped matrices, got {:?} and {:?}",
                self.shape(), other.shape(),
            )))
        }
    }

    /// Multiply row `row` with a factor `factor`.
    ///
    /// A factor of zero is allowed, it is the caller's responsibility to not destroy a pivot.
    pub fn scale_row_with(&self, row: usize, factor: F) -> Result<Self> {
        self.check_row(row)?;

        Ok(self.clone().multiply_row(row, factor))
    }

    /// Swap rows `first` and `second`.
    pub fn interchange_rows(&self, first: usize, second: usize) -> Result<Self> {
        self.check_row(first)?;
        self.check_row(second)?;

        Ok(self.clone().swap_rows(first, second))
    }

    /// Add `factor` times row `read_row` to row `write_row`.
    ///
    /// When both rows are the same, the row gets scaled by `1 + factor`.
    pub fn add_row_to(&self, read_row: usize, write_row: usize, factor: F) -> Result<Self> {
        self.check_row(read_row)?;
        self.check_row(write_row)?;

        Ok(self.clone().mul_add_rows(read_row, write_row, factor))
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of this matrix is not the number of rows of
    /// `other`.
    pub fn multiply_with(&self, other: &Self) -> Result<Self> {
        if self.nr_columns != other.nr_rows {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data = self.data.iter()
            .map(|row| (0..other.nr_columns)
                .map(|j| row.iter()
                    .zip(&other.data)
                    .map(|(&value, other_row)| value * other_row[j])
                    .sum::<F>())
                .collect())
            .collect();

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns })
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns).map(|j| self.column_values(j)).collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// The matrix with row `row` and column `column` removed.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for bad indices, `Shape` if the result would have no values.
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        self.check_row(row)?;
        self.check_column(column)?;
        if self.nr_rows == 1 || self.nr_columns == 1 {
            return Err(LinearAlgebraError::shape(format!(
                "a {:?} matrix has no minors", self.shape(),
            )));
        }

        Ok(self.without_row_and_column(row, column))
    }

    pub(crate) fn without_row_and_column(&self, row: usize, column: usize) -> Self {
        debug_assert!(self.nr_rows > 1 && self.nr_columns > 1);

        let data = self.data.iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, values)| values.iter()
                .enumerate()
                .filter(|&(j, _)| j != column)
                .map(|(_, &value)| value)
                .collect())
            .collect();

        Self { data, nr_rows: self.nr_rows - 1, nr_columns: self.nr_columns - 1 }
    }

    /// Row echelon form, computed with forward elimination.
    pub fn echelon_form(&self) -> Self {
        elimination::forward(self.clone()).reduced
    }

    /// Reduced row echelon form: every pivot is one and the only nonzero value in its column.
    pub fn row_reduced_echelon_form(&self) -> Self {
        elimination::reduce(self.clone()).reduced
    }

    /// Number of pivots found by elimination.
    pub fn rank(&self) -> usize {
        elimination::forward(self.clone()).pivots.len()
    }

    /// A basis of the null space `{x : Ax = 0}`.
    ///
    /// There is one basis vector per free (non pivot) column. The returned `Vec` is empty when
    /// the columns are linearly independent.
    pub fn null_space(&self) -> Vec<Vector<F>> {
        let Reduction { reduced, pivots, .. } = elimination::reduce(self.clone());

        elimination::null_space_basis(&reduced, &pivots)
    }

    /// Interpret a single column matrix as a vector.
    pub fn to_vector(&self) -> Result<Vector<F>> {
        if self.nr_columns != 1 {
            return Err(LinearAlgebraError::shape(format!(
                "only a single column matrix is a vector, this one has {} columns",
                self.nr_columns,
            )));
        }

        Ok(Vector::new_unchecked(self.column_values(0)))
    }

    /// All columns of this matrix, in order.
    pub fn to_vector_set(&self) -> VectorSet<F> {
        let columns = (0..self.nr_columns)
            .map(|j| Vector::new_unchecked(self.column_values(j)))
            .collect();

        VectorSet::new_unchecked(columns)
    }

    /// The vectors spanning the column space.
    ///
    /// These are all columns, not reduced to a basis; see `VectorSet::basis`.
    pub fn column_space(&self) -> VectorSet<F> {
        self.to_vector_set()
    }

    /// This matrix as a `SquareMatrix`, or a `Shape` error if it is not square.
    pub fn to_square(&self) -> Result<SquareMatrix<F>> {
        SquareMatrix::try_from(self.clone())
    }

    /// Multiply every value with `factor`.
    pub fn scale_with(&self, factor: F) -> Self {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&value| factor * value).collect())
            .collect();

        Self { data, ..*self }
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "addition")?;

        let data = self.data.iter()
            .zip(&other.data)
            .map(|(row, other_row)| row.iter()
                .zip(other_row)
                .map(|(&value, &other_value)| value + other_value)
                .collect())
            .collect();

        Ok(Self { data, ..*self })
    }

    /// Frobenius inner product: the sum of the elementwise products.
    pub fn inner_product_with(&self, other: &Self) -> Result<F> {
        self.check_same_shape(other, "an inner product")?;

        Ok(self.data.iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .map(|(&value, &other_value)| value * other_value)
            .sum::<F>())
    }

    /// Frobenius norm.
    pub fn norm(&self) -> F {
        self.data.iter().flatten().map(|&value| value * value).sum::<F>().sqrt()
    }

    /// Largest absolute value, the scale that rounding errors are measured against.
    pub fn max_abs_value(&self) -> F {
        self.data.iter().flatten().fold(F::zero(), |max, value| max.max(value.abs()))
    }
}

impl<F: Real> RowOperations<F> for Matrix<F> {
    fn lead(&self) -> &Matrix<F> {
        self
    }

    fn multiply_row(mut self, row: usize, factor: F) -> Self {
        debug_assert!(row < self.nr_rows);

        for value in &mut self.data[row] {
            *value = *value * factor;
        }

        self
    }

    fn swap_rows(mut self, first: usize, second: usize) -> Self {
        debug_assert!(first < self.nr_rows);
        debug_assert!(second < self.nr_rows);

        self.data.swap(first, second);
        self
    }

    fn mul_add_rows(mut self, read_row: usize, write_row: usize, factor: F) -> Self {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read;
        }

        self
    }

    fn settle_lead(mut self, row: usize, column: usize, value: F) -> Self {
        self.data[row][column] = value;
        self
    }
}

impl<F: Real> From<&Vector<F>> for Matrix<F> {
    /// A single column matrix.
    fn from(vector: &Vector<F>) -> Self {
        Self {
            data: vector.iter().map(|&value| vec![value]).collect(),
            nr_rows: vector.dimension(),
            nr_columns: 1,
        }
    }
}

impl<F: Real> From<Vector<F>> for Matrix<F> {
    fn from(vector: Vector<F>) -> Self {
        Self::from(&vector)
    }
}

impl<F: fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "[ {} ]", row.iter().join(" "))?;
        }

        Ok(())
    }
}

impl<F: Real> AbsDiffEq for Matrix<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape() &&
            self.data.iter().flatten()
                .zip(other.data.iter().flatten())
                .all(|(value, other_value)| value.abs_diff_eq(other_value, epsilon))
    }
}

impl<F: Real> RelativeEq for Matrix<F> {
    fn default_max_relative() -> Self::Epsilon {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.shape() == other.shape() &&
            self.data.iter().flatten()
                .zip(other.data.iter().flatten())
                .all(|(value, other_value)| value.relative_eq(other_value, epsilon, max_relative))
    }
}

/// If all row lengths agree, return the dimensions of `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> Result<(usize, usize)> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    if nr_rows == 0 || nr_columns == 0 {
        return Err(LinearAlgebraError::shape("a matrix needs at least one row and one column"));
    }
    if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
        return Err(LinearAlgebraError::shape(format!(
            "row {i} has length {} while the first row has length {nr_columns}", row.len(),
        )));
    }

    Ok((nr_rows, nr_columns))
}
