//! # Gaussian elimination
//!
//! Forward elimination brings a matrix in row echelon form, the backward pass that follows it
//! produces the reduced row echelon form. Both passes are written once, for anything that can
//! apply row operations. Pivots are always chosen by looking at a single "lead" matrix; for an
//! `AugmentedMatrix`, the same operations are replayed on the right hand side.
use log::{debug, trace};

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Real;

/// Elementary row operations, consuming `self` and returning the transformed value.
///
/// Indices are not checked, callers should make sure they are in range.
pub trait RowOperations<F>: Sized {
    /// The matrix whose values determine the pivots.
    fn lead(&self) -> &Matrix<F>;
    /// Multiply row `row` with a factor `factor`.
    fn multiply_row(self, row: usize, factor: F) -> Self;
    /// Swap rows `first` and `second`.
    fn swap_rows(self, first: usize, second: usize) -> Self;
    /// Add `factor` times row `read_row` to row `write_row`.
    fn mul_add_rows(self, read_row: usize, write_row: usize, factor: F) -> Self;
    /// Overwrite a value of the lead matrix with the value that it has up to rounding.
    ///
    /// Only the lead matrix is touched; it is not a row operation.
    fn settle_lead(self, row: usize, column: usize, value: F) -> Self;
}

/// Position of a pivot.
///
/// After `forward`, the pivot is the first nonzero value in its row. After `backward`, it is also
/// one, and the only nonzero value in its column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pivot {
    /// Index of the row holding the pivot.
    pub row: usize,
    /// Index of the column holding the pivot; increases with `row`.
    pub column: usize,
}

/// Result of an elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<T> {
    /// The transformed value.
    pub reduced: T,
    /// Pivots in order of increasing row (and column) index.
    pub pivots: Vec<Pivot>,
    /// Number of times that two rows were swapped.
    pub nr_swaps: usize,
}

/// Forward elimination.
///
/// Columns are processed from left to right. In each column, the first row at or below the
/// current pivot row with a value that is not negligible is swapped into the pivot row, after which
/// all values below it are eliminated. Columns without such a value are free and are skipped.
///
/// Whether a value is negligible is decided relative to the largest absolute value in the lead
/// matrix, so the pivots found don't change when the matrix is scaled.
pub fn forward<F: Real, T: RowOperations<F>>(mut target: T) -> Reduction<T> {
    let (nr_rows, nr_columns) = target.lead().shape();
    let scale = target.lead().max_abs_value();

    let mut pivots = Vec::with_capacity(nr_rows.min(nr_columns));
    let mut nr_swaps = 0;
    for column in 0..nr_columns {
        let pivot_row = pivots.len();
        if pivot_row == nr_rows {
            break;
        }

        let candidate = (pivot_row..nr_rows)
            .find(|&row| !target.lead().value(row, column).is_negligible_relative_to(scale));
        let Some(row) = candidate else {
            trace!("column {column} has no pivot");
            target = clear_below(target, pivot_row, column);
            continue;
        };
        if row != pivot_row {
            trace!("swapping rows {pivot_row} and {row} for the pivot in column {column}");
            target = target.swap_rows(pivot_row, row);
            nr_swaps += 1;
        }

        let pivot = target.lead().value(pivot_row, column);
        for row in (pivot_row + 1)..nr_rows {
            let value = target.lead().value(row, column);
            if value != F::zero() {
                target = target.mul_add_rows(pivot_row, row, -value / pivot);
            }
            target = target.settle_lead(row, column, F::zero());
        }

        pivots.push(Pivot { row: pivot_row, column });
    }

    debug!(
        "forward elimination of a {nr_rows} x {nr_columns} matrix: rank {}, {nr_swaps} row swaps",
        pivots.len(),
    );

    Reduction { reduced: target, pivots, nr_swaps }
}

/// Backward elimination, to be applied on the result of `forward`.
///
/// Every pivot is scaled to one, after which the values above it are eliminated.
pub fn backward<F: Real, T: RowOperations<F>>(forward: Reduction<T>) -> Reduction<T> {
    let Reduction { reduced: mut target, pivots, nr_swaps } = forward;

    for &Pivot { row: pivot_row, column } in &pivots {
        let pivot = target.lead().value(pivot_row, column);
        if pivot != F::one() {
            target = target.multiply_row(pivot_row, pivot.recip());
        }
        target = target.settle_lead(pivot_row, column, F::one());

        for row in 0..pivot_row {
            let value = target.lead().value(row, column);
            if value != F::zero() {
                target = target.mul_add_rows(pivot_row, row, -value);
            }
            target = target.settle_lead(row, column, F::zero());
        }
    }

    Reduction { reduced: target, pivots, nr_swaps }
}

/// Reduced row echelon form: forward elimination followed by backward elimination.
pub fn reduce<F: Real, T: RowOperations<F>>(target: T) -> Reduction<T> {
    backward(forward(target))
}

/// Values in a column without a pivot that are zero up to rounding are made exactly zero.
fn clear_below<F: Real, T: RowOperations<F>>(mut target: T, pivot_row: usize, column: usize) -> T {
    let nr_rows = target.lead().nr_rows();
    for row in pivot_row..nr_rows {
        if target.lead().value(row, column) != F::zero() {
            target = target.settle_lead(row, column, F::zero());
        }
    }

    target
}

/// Basis of the null space, read from a reduced row echelon form.
///
/// Each free column `f` gives one basis vector: a one at index `f`, zeros at the other free
/// indices, and at the index of each pivot column the negated value in column `f` on that pivot's
/// row.
///
/// # Arguments
///
/// * `reduced`: Matrix in reduced row echelon form.
/// * `pivots`: The pivots of `reduced`, as found during its reduction.
pub(crate) fn null_space_basis<F: Real>(reduced: &Matrix<F>, pivots: &[Pivot]) -> Vec<Vector<F>> {
    let nr_columns = reduced.nr_columns();

    let mut pivot_row_of = vec![None; nr_columns];
    for pivot in pivots {
        pivot_row_of[pivot.column] = Some(pivot.row);
    }

    (0..nr_columns)
        .filter(|&column| pivot_row_of[column].is_none())
        .map(|free| {
            let entries = pivot_row_of.iter()
                .enumerate()
                .map(|(j, pivot_row)| match *pivot_row {
                    Some(row) => -reduced.value(row, free),
                    None if j == free => F::one(),
                    None => F::zero(),
                })
                .collect();
            Vector::new_unchecked(entries)
        })
        .collect()
}
