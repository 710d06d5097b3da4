//! # Number types
//!
//! Matrices and vectors are defined over the floating point types. Elimination decides on pivots by
//! comparing computed values with zero, and rounding errors make exact comparisons unreliable:
//! every such comparison goes through the tolerance defined here.
//!
//! The tolerance is relative: a value is compared with the size of the data it was computed from,
//! so that multiplying all input by a constant doesn't change any of the decisions.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;

/// A real number approximated by a floating point type.
pub trait Real:
    Float +
    Sum +
    Debug +
    Display +
    AbsDiffEq<Epsilon=Self> +
    RelativeEq +
    Send +
    Sync +
    'static
{
    /// Relative precision of computed values.
    ///
    /// Values that are this many times smaller than the data they were computed from are
    /// considered to be zero.
    const TOLERANCE: Self;

    /// Whether this value is zero, up to rounding, for values of order one.
    fn is_negligible(self) -> bool {
        self.is_negligible_relative_to(Self::one())
    }

    /// Whether this value is zero, up to rounding, when computed from values of size `scale`.
    ///
    /// With a `scale` of zero, only zero itself is negligible.
    fn is_negligible_relative_to(self, scale: Self) -> bool {
        self.abs() <= Self::TOLERANCE * scale
    }

    /// Whether this value equals `other`, up to rounding.
    fn is_close_to(self, other: Self) -> bool {
        (self - other).is_negligible()
    }
}

macro_rules! impl_real {
    ($float:ident, $tolerance:expr) => {
        impl Real for $float {
            const TOLERANCE: Self = $tolerance;
        }
    }
}
impl_real!(f64, 1e-10);
impl_real!(f32, 1e-5);

#[cfg(test)]
mod test {
    use crate::data::number_types::Real;

    #[test]
    fn negligible() {
        assert!(0f64.is_negligible());
        assert!((0.1f64 + 0.2 - 0.3).is_negligible());
        assert!(!1e-6f64.is_negligible());
        assert!((-1e-11f64).is_negligible());

        assert!(1e-6f32.is_negligible());
        assert!(!1e-3f32.is_negligible());
    }

    #[test]
    fn close_to() {
        assert!((0.1f64 * 3f64).is_close_to(0.3));
        assert!(!1f64.is_close_to(1.001));
        assert!((1f32 / 3f32 * 3f32).is_close_to(1f32));
    }

    #[test]
    fn negligible_relative_to() {
        assert!(1e-8f64.is_negligible_relative_to(1e7));
        assert!(!1e-12f64.is_negligible_relative_to(1e-11));
        assert!(!1e-3f64.is_negligible_relative_to(1e-3));
        assert!(0f64.is_negligible_relative_to(0f64));
        assert!(!1e-300f64.is_negligible_relative_to(0f64));
        assert!((-2e-6f32).is_negligible_relative_to(1f32));
    }
}
