//! # Solutions of linear systems
//!
//! Solving `Ax = b` gives either nothing, a single vector, or a particular solution plus any
//! combination of the vectors spanning the null space of `A`.
use log::debug;

use crate::data::linear_algebra::matrix::augmented::AugmentedMatrix;
use crate::data::linear_algebra::matrix::elimination::{self, Reduction};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::set::VectorSet;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::Real;
use crate::error::{LinearAlgebraError, Result};

/// The solution set `{particular + Σ cᵢ nᵢ}` of a linear system, where the `nᵢ` span the null space
/// of the coefficient matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    /// `None` if the system is inconsistent.
    particular: Option<Vector<F>>,
    /// Basis of the null space of the coefficient matrix, independent of the right hand side.
    null_space: Vec<Vector<F>>,
}

/// How many vectors solve a system.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolutionKind {
    /// No solution.
    Inconsistent,
    /// Exactly one solution.
    Unique,
    /// A particular solution and a nontrivial null space.
    Infinite,
}

impl<F: Real> Solution<F> {
    /// Some solution, if there is any. Free variables are zero in it.
    pub fn particular(&self) -> Option<&Vector<F>> {
        self.particular.as_ref()
    }

    /// Basis vectors of the null space of the coefficient matrix, one for each free variable.
    pub fn null_space(&self) -> &[Vector<F>] {
        &self.null_space
    }

    /// The null space basis as a set, `None` when the null space is trivial.
    pub fn null_space_basis(&self) -> Option<VectorSet<F>> {
        VectorSet::new(self.null_space.clone()).ok()
    }

    /// Whether there are no, one or infinitely many solutions.
    pub fn kind(&self) -> SolutionKind {
        match (&self.particular, self.null_space.is_empty()) {
            (None, _) => SolutionKind::Inconsistent,
            (Some(_), true) => SolutionKind::Unique,
            (Some(_), false) => SolutionKind::Infinite,
        }
    }

    /// Whether there is any solution.
    pub fn is_consistent(&self) -> bool {
        self.particular.is_some()
    }

    /// Whether there is exactly one solution.
    pub fn is_unique(&self) -> bool {
        self.kind() == SolutionKind::Unique
    }

    /// The solution, if it is the only one.
    pub fn into_unique(self) -> Option<Vector<F>> {
        if self.null_space.is_empty() {
            self.particular
        } else {
            None
        }
    }
}

impl<F: Real> Matrix<F> {
    /// Solve `Ax = b` by row reducing `[A | b]`.
    ///
    /// # Arguments
    ///
    /// * `b`: Right hand side, with one value for each row of this matrix.
    ///
    /// # Return value
    ///
    /// The system is inconsistent if a row of the reduced form has only zeros on the left, but not
    /// on the right. A value on the right counts as zero when it is negligible relative to the
    /// largest absolute value in `A` and `b`. Otherwise, each pivot variable takes the value on the right of its pivot row,
    /// while the free variables are zero.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `b` doesn't have a value for each row.
    pub fn solve(&self, b: &Vector<F>) -> Result<Solution<F>> {
        if b.dimension() != self.nr_rows() {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "solve",
                left: self.shape(),
                right: (b.dimension(), 1),
            });
        }

        let augmented = AugmentedMatrix::new(self.clone(), b.to_matrix())?;
        let Reduction { reduced, pivots, .. } = augmented.reduce();
        let (left, right) = reduced.into_parts();

        let null_space = elimination::null_space_basis(&left, &pivots);
        // Rows below the last pivot are zero on the left
        let scale = self.max_abs_value().max(b.max_abs_value());
        let consistent = (pivots.len()..self.nr_rows())
            .all(|row| right.value(row, 0).is_negligible_relative_to(scale));
        if !consistent {
            debug!("a system with {} equations is inconsistent", self.nr_rows());
            return Ok(Solution { particular: None, null_space });
        }

        let mut particular = vec![F::zero(); self.nr_columns()];
        for pivot in &pivots {
            particular[pivot.column] = right.value(pivot.row, 0);
        }
        debug!(
            "solved a system with {} unknowns, {} of them free",
            self.nr_columns(), null_space.len(),
        );

        Ok(Solution { particular: Some(Vector::new_unchecked(particular)), null_space })
    }
}
