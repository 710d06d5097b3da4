use approx::AbsDiffEq;
use proptest::collection::vec;
use proptest::prelude::*;

use rowred::data::linear_algebra::matrix::Matrix;
use rowred::data::linear_algebra::matrix::square::SquareMatrix;
use rowred::data::linear_algebra::vector::Vector;

/// Integer values keep determinants integral, so that "singular" is never a matter of rounding.
const VALUES: std::ops::RangeInclusive<i32> = -4..=4;

fn to_rows(data: Vec<Vec<i32>>) -> Vec<Vec<f64>> {
    data.into_iter()
        .map(|row| row.into_iter().map(f64::from).collect())
        .collect()
}

fn matrix(max_rows: usize, max_columns: usize) -> impl Strategy<Value = Matrix<f64>> {
    (1..=max_rows, 1..=max_columns)
        .prop_flat_map(|(nr_rows, nr_columns)| vec(vec(VALUES, nr_columns), nr_rows))
        .prop_map(|data| Matrix::new(to_rows(data)).unwrap())
}

fn square_matrix(max_len: usize) -> impl Strategy<Value = SquareMatrix<f64>> {
    (1..=max_len)
        .prop_flat_map(|len| vec(vec(VALUES, len), len))
        .prop_map(|data| SquareMatrix::new(to_rows(data)).unwrap())
}

/// A matrix together with a vector that it can be multiplied with.
fn matrix_and_vector(max_rows: usize, max_columns: usize) -> impl Strategy<Value = (Matrix<f64>, Vector<f64>)> {
    matrix(max_rows, max_columns).prop_flat_map(|m| {
        let nr_columns = m.nr_columns();
        (Just(m), vec(VALUES, nr_columns))
    })
        .prop_map(|(m, x)| (m, Vector::new(x.into_iter().map(f64::from).collect()).unwrap()))
}

fn apply(m: &Matrix<f64>, x: &Vector<f64>) -> Matrix<f64> {
    m.multiply_with(&x.to_matrix()).unwrap()
}

proptest! {
    #[test]
    fn row_reduced_echelon_form_is_idempotent(m in matrix(4, 5)) {
        let once = m.row_reduced_echelon_form();
        let twice = once.row_reduced_echelon_form();

        prop_assert!(once.abs_diff_eq(&twice, 1e-9), "{once}\n{twice}");
    }

    #[test]
    fn rank_of_transpose(m in matrix(4, 4)) {
        prop_assert_eq!(m.rank(), m.transpose().rank());
    }

    #[test]
    fn rank_does_not_depend_on_scale(m in matrix(4, 4), exponent in -12i32..=12) {
        let scaled = m.scale_with(10f64.powi(exponent));

        prop_assert_eq!(scaled.rank(), m.rank());
        prop_assert_eq!(scaled.null_space().len(), m.null_space().len());
    }

    #[test]
    fn singular_at_any_scale(m in square_matrix(4), exponent in -12i32..=12) {
        let singular = m.determinant_by_cofactors().abs() < 0.5;
        let scaled = m.scale_with(10f64.powi(exponent)).to_square().unwrap();

        prop_assert_eq!(singular, scaled.inverse().is_err());
        prop_assert_eq!(singular, !scaled.column_space().is_linearly_independent());
    }

    #[test]
    fn inverse_is_two_sided(m in square_matrix(4)) {
        prop_assume!(m.determinant().abs() > 0.5);

        let inverse = m.inverse().unwrap();
        let identity = Matrix::identity(m.len()).unwrap();
        prop_assert!(m.multiply_with(&inverse).unwrap().abs_diff_eq(&identity, 1e-8));
        prop_assert!(inverse.multiply_with(&m).unwrap().abs_diff_eq(&identity, 1e-8));
    }

    #[test]
    fn determinants_agree(m in square_matrix(5)) {
        let by_elimination = m.determinant();
        let by_cofactors = m.determinant_by_cofactors();

        prop_assert!((by_elimination - by_cofactors).abs() < 1e-6 * (1f64 + by_cofactors.abs()));
    }

    #[test]
    fn singular_iff_dependent_columns(m in square_matrix(4)) {
        let singular = m.determinant_by_cofactors().abs() < 0.5;

        prop_assert_eq!(singular, !m.null_space().is_empty());
        prop_assert_eq!(singular, !m.column_space().is_linearly_independent());
        prop_assert_eq!(singular, m.inverse().is_err());
    }

    #[test]
    fn null_space_is_annihilated(m in matrix(4, 5)) {
        let null_space = m.null_space();

        prop_assert_eq!(null_space.len(), m.nr_columns() - m.rank());
        let zero = Matrix::zeros(m.nr_rows(), 1).unwrap();
        for vector in &null_space {
            prop_assert!(apply(&m, vector).abs_diff_eq(&zero, 1e-9));
        }
    }

    #[test]
    fn solve_consistent_system((m, x) in matrix_and_vector(4, 5)) {
        let b = apply(&m, &x).to_vector().unwrap();
        let solution = m.solve(&b).unwrap();

        prop_assert!(solution.is_consistent());
        prop_assert_eq!(solution.null_space().len(), m.nr_columns() - m.rank());
        let particular = solution.particular().unwrap();
        prop_assert!(apply(&m, particular).abs_diff_eq(&b.to_matrix(), 1e-8));
        for vector in solution.null_space() {
            let shifted = particular.add(vector).unwrap();
            prop_assert!(apply(&m, &shifted).abs_diff_eq(&b.to_matrix(), 1e-8));
        }
    }

    #[test]
    fn lower_upper_reconstructs(m in matrix(4, 4)) {
        let decomposition = m.lu_factorization().unwrap();
        let product = decomposition.lower().multiply_with(decomposition.upper()).unwrap();

        prop_assert!(product.abs_diff_eq(&m, 1e-9));
        prop_assert!(decomposition.upper().abs_diff_eq(&m.echelon_form(), 1e-9));
    }

    #[test]
    fn gram_schmidt_is_orthonormal(m in matrix(4, 4)) {
        let columns = m.column_space();
        prop_assume!(columns.basis().is_ok());

        let orthogonal = columns.orthogonal_basis().unwrap();
        let orthonormal = columns.orthonormal_basis().unwrap();
        prop_assert_eq!(orthogonal.size(), m.rank());
        for (i, first) in orthonormal.iter().enumerate() {
            prop_assert!((first.norm() - 1f64).abs() < 1e-9);
            for second in orthonormal.iter().skip(i + 1) {
                prop_assert!(first.is_orthonormal_with(second).unwrap());
            }
        }
        for (i, first) in orthogonal.iter().enumerate() {
            for second in orthogonal.iter().skip(i + 1) {
                prop_assert!(first.is_orthogonal_with(second).unwrap());
            }
        }
    }
}
