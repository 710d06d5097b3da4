/// Shorthand for creating a `Matrix<f64>` from rows of numbers, mostly in tests.
///
/// # Panics
///
/// If there are no values or the rows have different lengths.
#[macro_export]
macro_rules! matrix {
    ($([$($value:expr),+ $(,)?]),+ $(,)?) => {
        $crate::data::linear_algebra::matrix::Matrix::<f64>::new(vec![$(vec![$($value as f64),+]),+])
            .unwrap()
    };
}

/// Shorthand for creating a `Vector<f64>`, mostly in tests.
#[macro_export]
macro_rules! vector {
    ($($value:expr),+ $(,)?) => {
        $crate::data::linear_algebra::vector::Vector::<f64>::new(vec![$($value as f64),+]).unwrap()
    };
}
