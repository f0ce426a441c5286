// =========================================================================
// FALSIFY-VE: Vector primitives contract (lineal primitives)
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
//   - Cross product anti-commutativity: u x v = -(v x u)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn falsify_ve_001_dot_commutative() {
    let u = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let v = Vector::from_array([4.0, 5.0, 6.0]);

    let uv = u.dot(&v);
    let vu = v.dot(&u);

    assert!(
        (uv - vu).abs() < 1e-6,
        "FALSIFIED VE-001: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VE-002: Norm is non-negative
#[test]
fn falsify_ve_002_norm_nonneg() {
    let v = Vector::<f32, 2>::from_array([-3.0, 4.0]);
    let n = v.norm();

    assert!(n >= 0.0, "FALSIFIED VE-002: norm={n}, expected >= 0.0");
    assert!(
        (n - 5.0).abs() < 1e-5,
        "FALSIFIED VE-002: norm of [-3,4]={n}, expected 5.0"
    );
}

/// FALSIFY-VE-003: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_003_cauchy_schwarz() {
    let u = Vector::<f32, 4>::from_array([1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_array([4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-5,
        "FALSIFIED VE-003: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-004: Cross product is anti-commutative: u x v = -(v x u)
#[test]
fn falsify_ve_004_cross_anti_commutative() {
    let u = Vector::<f32, 3>::from_array([1.0, -2.0, 0.5]);
    let v = Vector::from_array([3.0, 1.0, -1.0]);

    let uv = u.cross(&v);
    let vu = v.cross(&u);

    for i in 0..3 {
        assert!(
            (uv[i] + vu[i]).abs() < 1e-6,
            "FALSIFIED VE-004: (u x v)[{i}]={} != -(v x u)[{i}]={}",
            uv[i],
            vu[i]
        );
    }
}

/// FALSIFY-VE-005: Cross product is orthogonal to both operands
#[test]
fn falsify_ve_005_cross_orthogonal() {
    let u = Vector::<f32, 3>::from_array([2.0, 1.0, -3.0]);
    let v = Vector::from_array([0.5, 4.0, 1.0]);

    let c = u.cross(&v);

    assert!(
        c.dot(&u).abs() < 1e-4,
        "FALSIFIED VE-005: dot(u x v, u)={}, expected 0",
        c.dot(&u)
    );
    assert!(
        c.dot(&v).abs() < 1e-4,
        "FALSIFIED VE-005: dot(u x v, v)={}, expected 0",
        c.dot(&v)
    );
}

/// FALSIFY-VE-006: Plane cross product is anti-commutative
#[test]
fn falsify_ve_006_cross_2d_anti_commutative() {
    let u = Vector::<f32, 2>::from_array([1.5, -2.0]);
    let v = Vector::from_array([0.5, 3.0]);

    assert!(
        (u.cross(&v) + v.cross(&u)).abs() < 1e-6,
        "FALSIFIED VE-006: cross(u,v)={} != -cross(v,u)={}",
        u.cross(&v),
        v.cross(&u)
    );
}

/// FALSIFY-VE-007: Distance is symmetric and zero on the diagonal
#[test]
fn falsify_ve_007_distance_metric() {
    let u = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let v = Vector::from_array([-2.0, 0.5, 4.0]);

    assert!(
        u.distance_to(&u).abs() < 1e-6,
        "FALSIFIED VE-007: distance(u,u)={}, expected 0",
        u.distance_to(&u)
    );
    assert!(
        (u.distance_to(&v) - v.distance_to(&u)).abs() < 1e-6,
        "FALSIFIED VE-007: distance(u,v)={} != distance(v,u)={}",
        u.distance_to(&v),
        v.distance_to(&u)
    );
}

mod vector_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn vec3_strategy() -> impl Strategy<Value = Vector<f32, 3>> {
        (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0)
            .prop_map(|(x, y, z)| Vector::from_array([x, y, z]))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// FALSIFY-VE-001-prop: dot commutativity for random vectors
        #[test]
        fn falsify_ve_001_prop_dot_commutative(u in vec3_strategy(), v in vec3_strategy()) {
            prop_assert!((u.dot(&v) - v.dot(&u)).abs() < 1e-3);
        }

        /// FALSIFY-VE-004-prop: cross anti-commutativity for random vectors
        #[test]
        fn falsify_ve_004_prop_cross_anti_commutative(u in vec3_strategy(), v in vec3_strategy()) {
            let uv = u.cross(&v);
            let vu = v.cross(&u);
            for i in 0..3 {
                prop_assert!((uv[i] + vu[i]).abs() < 1e-3);
            }
        }

        /// FALSIFY-VE-007-prop: distance symmetry for random vectors
        #[test]
        fn falsify_ve_007_prop_distance_symmetric(u in vec3_strategy(), v in vec3_strategy()) {
            prop_assert!((u.distance_to(&v) - v.distance_to(&u)).abs() < 1e-3);
        }
    }
}
