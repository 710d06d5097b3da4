//! # Linear algebra primitives
//!
//! Dense matrices and vectors, the elimination algorithms working on them and the solutions of the
//! linear systems they represent.

pub mod matrix;
pub mod solution;
pub mod vector;
