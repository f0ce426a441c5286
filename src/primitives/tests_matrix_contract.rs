// =========================================================================
// FALSIFY-MX: Matrix primitives contract (lineal primitives)
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
//   - Laplace expansion: det(A) = Σ_j (-1)^j A[0][j] det(minor(0, j))
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a =
        Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-6,
                "FALSIFIED MX-001: (A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Identity determinant: det(I_n) = 1 for n = 1..=6
#[test]
fn falsify_mx_002_identity_determinant() {
    for n in 1..=6 {
        let det = Matrix::eye(n).determinant().expect("identity is square");
        assert!(
            (det - 1.0).abs() < 1e-5,
            "FALSIFIED MX-002: det(I_{n})={det}, expected 1.0"
        );
    }
}

/// FALSIFY-MX-003: Determinant is transpose-invariant: det(A) = det(A^T)
#[test]
fn falsify_mx_003_determinant_transpose_invariant() {
    let a = Matrix::from_vec(
        4,
        4,
        vec![
            2.0, -1.0, 3.0, 0.0, 1.0, 4.0, -2.0, 5.0, 0.0, 2.0, 1.0, -3.0, 3.0, 1.0, 0.0, 2.0,
        ],
    )
    .expect("valid");

    let da = a.determinant().expect("square");
    let dat = a.transpose().determinant().expect("square");

    assert!(
        (da - dat).abs() < 1e-3,
        "FALSIFIED MX-003: det(A)={da} != det(A^T)={dat}"
    );
}

/// FALSIFY-MX-004: Determinant is multiplicative: det(A*B) = det(A)*det(B)
#[test]
fn falsify_mx_004_determinant_multiplicative() {
    let a = Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, -1.0, 3.0, 2.0, 1.0, 1.0, 0.0])
        .expect("valid");
    let b = Matrix::from_vec(3, 3, vec![1.0, 2.0, 0.0, 0.0, -1.0, 3.0, 2.0, 1.0, 1.0])
        .expect("valid");

    let dab = a
        .matmul(&b)
        .expect("compatible dims")
        .determinant()
        .expect("square");
    let da = a.determinant().expect("square");
    let db = b.determinant().expect("square");

    assert!(
        (dab - da * db).abs() < 1e-2,
        "FALSIFIED MX-004: det(AB)={dab} != det(A)*det(B)={}",
        da * db
    );
}

/// FALSIFY-MX-005: Inverse roundtrip: A * A^-1 = I within tolerance
#[test]
fn falsify_mx_005_inverse_roundtrip() {
    let a = Matrix::from_vec(3, 3, vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0])
        .expect("valid");
    let inv = a.inverse().expect("det is -306, not singular");
    let product = a.matmul(&inv).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (product.get(i, j) - expected).abs() < 1e-4,
                "FALSIFIED MX-005: (A*A^-1)[{i},{j}]={}, expected {expected}",
                product.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-006: Adjoint is the cofactor transpose:
/// adjoint(A) = cofactor_matrix(A)^T
#[test]
fn falsify_mx_006_adjoint_is_cofactor_transpose() {
    let a = Matrix::from_vec(3, 3, vec![3.0, 0.0, 2.0, 2.0, 0.0, -2.0, 0.0, 1.0, 1.0])
        .expect("valid");

    let adjoint = a.adjoint().expect("square");
    let cofactor_t = a.cofactor_matrix().expect("square").transpose();

    assert_eq!(
        adjoint, cofactor_t,
        "FALSIFIED MX-006: adjoint != cofactor^T"
    );
}

/// FALSIFY-MX-007: Minor shape: minor of (m x n) is (m-1 x n-1)
#[test]
fn falsify_mx_007_minor_shape() {
    let a = Matrix::<f32>::zeros(5, 4);
    let minor = a.minor(2, 3).expect("5x4 matrix has minors");

    assert_eq!(
        minor.shape(),
        (4, 3),
        "FALSIFIED MX-007: minor shape={:?}, expected (4,3)",
        minor.shape()
    );
}

/// FALSIFY-MX-008: Identity matmul: A * I = A
#[test]
fn falsify_mx_008_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::eye(3);
    let result = a.matmul(&eye).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (result.get(i, j) - a.get(i, j)).abs() < 1e-5,
                "FALSIFIED MX-008: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                result.get(i, j),
                a.get(i, j)
            );
        }
    }
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    // Deterministic integer-valued entries keep f32 determinant arithmetic
    // exact, so the algebraic laws hold with tight tolerances.
    fn int_data(n: usize, seed: u32) -> Vec<f32> {
        (0..n)
            .map(|i| ((i as u32 * 7 + seed * 13) % 9) as f32 - 4.0)
            .collect()
    }

    /// FALSIFY-MX-003-prop: det(A) = det(A^T) for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_003_prop_determinant_transpose_invariant(
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, int_data(n * n, seed)).expect("valid");
            let da = a.determinant().expect("square");
            let dat = a.transpose().determinant().expect("square");

            prop_assert!(
                (da - dat).abs() < 1e-2,
                "FALSIFIED MX-003-prop: det(A)={} != det(A^T)={}",
                da, dat
            );
        }
    }

    /// FALSIFY-MX-005-prop: A * A^-1 = I for random nonsingular matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_005_prop_inverse_roundtrip(
            n in 1..=4usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, int_data(n * n, seed)).expect("valid");
            let det = a.determinant().expect("square");
            prop_assume!(det.abs() >= 1.0);

            let inv = a.inverse().expect("determinant checked above");
            let product = a.matmul(&inv).expect("compatible dims");

            for i in 0..n {
                for j in 0..n {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!(
                        (product.get(i, j) - expected).abs() < 1e-3,
                        "FALSIFIED MX-005-prop: (A*A^-1)[{},{}]={}",
                        i, j, product.get(i, j)
                    );
                }
            }
        }
    }
}
