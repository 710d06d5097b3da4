//! # Data structures
//!
//! Scalars, and the matrices and vectors built from them.

pub mod linear_algebra;
pub mod number_types;
