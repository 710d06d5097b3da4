//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

/// Randomized checks on small matrices with integer values.
mod properties;
/// Worked examples with known answers.
mod scenarios;
