//! # Row reduction
//!
//! Dense matrices and vectors over floating point numbers, and the algorithms built on Gaussian
//! elimination: solving linear systems, inverses, determinants, null spaces, bases, LU
//! factorization, Gram-Schmidt orthogonalization and changes of coordinates.
//!
//! All values are immutable; operations return new instances. Zero tests use the tolerance of the
//! scalar type, see `data::number_types::Real`.
#![warn(missing_docs)]

pub mod data;
pub mod error;
mod macros;
