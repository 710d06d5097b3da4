use approx::assert_abs_diff_eq;

use rowred::data::linear_algebra::matrix::augmented::AugmentedMatrix;
use rowred::data::linear_algebra::matrix::Matrix;
use rowred::data::linear_algebra::solution::SolutionKind;
use rowred::data::linear_algebra::vector::set::VectorSet;
use rowred::error::{LinearAlgebraError, Result};
use rowred::{matrix, vector};

#[test]
fn singular_system_without_solution() -> Result<()> {
    let a = matrix![[0, 1, -4], [2, -3, 2], [4, -8, 12]];
    let b = vector![8, 1, 1];

    assert_abs_diff_eq!(a.to_square()?.determinant(), 0f64);
    let solution = a.solve(&b)?;
    assert_eq!(solution.kind(), SolutionKind::Inconsistent);
    assert_eq!(a.to_square()?.inverse(), Err(LinearAlgebraError::NotInvertible));

    // Changing the right hand side to a vector in the column space makes the system consistent
    let b = vector![8, 1, -14];
    let solution = a.solve(&b)?;
    assert_eq!(solution.kind(), SolutionKind::Infinite);
    let particular = solution.particular().ok_or(LinearAlgebraError::NotInvertible)?;
    assert_abs_diff_eq!(a.multiply_with(&particular.to_matrix())?, b.to_matrix(), epsilon = 1e-12);

    Ok(())
}

#[test]
fn nonsingular_system() -> Result<()> {
    let a = matrix![[1, 1, 1], [0, 2, 5], [2, 5, -1]];
    let b = vector![6, -4, 27];

    let solution = a.solve(&b)?;
    assert!(solution.is_unique());
    assert!(solution.null_space().is_empty());
    assert_abs_diff_eq!(*solution.particular().unwrap(), vector![5, 3, -2], epsilon = 1e-12);

    let inverse = a.to_square()?.inverse()?;
    assert_abs_diff_eq!(inverse.multiply_with(&b.to_matrix())?, vector![5, 3, -2].to_matrix(), epsilon = 1e-12);

    Ok(())
}

#[test]
fn underdetermined_system() -> Result<()> {
    let a = matrix![[1, 2, -1, 3], [2, 4, 1, 0]];
    let b = vector![4, 5];

    let solution = a.solve(&b)?;
    assert_eq!(solution.kind(), SolutionKind::Infinite);
    assert_eq!(solution.null_space().len(), a.nr_columns() - a.rank());
    assert_eq!(solution.null_space().len(), 2);

    let particular = solution.particular().unwrap();
    assert_abs_diff_eq!(a.multiply_with(&particular.to_matrix())?, b.to_matrix(), epsilon = 1e-12);
    let basis = solution.null_space_basis().unwrap();
    assert!(basis.is_linearly_independent());
    for vector in basis.iter() {
        let shifted = particular.add(vector)?;
        assert_abs_diff_eq!(a.multiply_with(&shifted.to_matrix())?, b.to_matrix(), epsilon = 1e-12);
    }

    Ok(())
}

#[test]
fn change_of_coordinates() -> Result<()> {
    let basis = VectorSet::new(vec![vector![1, 2], vector![4, 1]])?;
    let target = vector![6, 5];

    let coordinates = basis.relative_coordinates_of(&target)?;
    let reconstructed = basis.to_matrix().multiply_with(&coordinates.to_matrix())?;
    assert_abs_diff_eq!(reconstructed, target.to_matrix(), epsilon = 1e-12);

    Ok(())
}

#[test]
fn repeated_vector_is_dependent() -> Result<()> {
    let v = vector![1, 2, 3];
    let set = VectorSet::new(vec![v.clone(), v])?;

    assert!(!set.is_linearly_independent());
    assert_eq!(set.basis()?.size(), 1);

    Ok(())
}

#[test]
fn orthonormalize_plane() -> Result<()> {
    let set = VectorSet::new(vec![vector![1, 1, 0], vector![1, 0, 1]])?;
    let orthonormal = set.orthonormal_basis()?;

    let first = orthonormal.get(0)?;
    let second = orthonormal.get(1)?;
    assert!(first.is_orthonormal_with(second)?);
    // Both still span the original vectors
    let plane = orthonormal.to_matrix();
    for vector in set.iter() {
        let with_vector = AugmentedMatrix::new(plane.clone(), vector.to_matrix())?;
        let (left, right) = with_vector.row_reduced_echelon_form().into_parts();
        assert_eq!(left.rank(), 2);
        assert_abs_diff_eq!(right.get(2, 0)?, 0f64, epsilon = 1e-12);
    }

    Ok(())
}

#[test]
fn lower_upper() -> Result<()> {
    let a = matrix![[1, 2, 3], [2, 5, 3], [1, 0, 8]];

    let (upper, lower) = a.lu_factorization()?.into_parts();
    assert_abs_diff_eq!(upper, matrix![[1, 2, 3], [0, 1, -3], [0, 0, -1]], epsilon = 1e-12);
    assert_abs_diff_eq!(lower.multiply_with(&upper)?, a, epsilon = 1e-12);
    assert_abs_diff_eq!(lower.determinant() * upper.to_square()?.determinant(), -1f64, epsilon = 1e-12);

    Ok(())
}

#[test]
fn shape_errors() {
    assert!(matches!(Matrix::<f64>::new(vec![vec![1.0], vec![]]), Err(LinearAlgebraError::Shape { .. })));
    assert!(matches!(
        AugmentedMatrix::new(matrix![[1, 2]], matrix![[1], [2]]),
        Err(LinearAlgebraError::Shape { .. }),
    ));
    assert_eq!(
        matrix![[1, 2]].multiply_with(&matrix![[1, 2]]),
        Err(LinearAlgebraError::DimensionMismatch { operation: "multiplication", left: (1, 2), right: (1, 2) }),
    );
    assert_eq!(
        LinearAlgebraError::DimensionMismatch { operation: "solve", left: (2, 2), right: (3, 1) }.to_string(),
        "dimension mismatch in solve: (2, 2) and (3, 1)",
    );
}
