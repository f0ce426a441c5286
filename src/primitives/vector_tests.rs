pub(crate) use super::*;

#[test]
fn test_dimensions_1() {
    let v = Vector::<f32, 1>::new();
    assert_eq!(v.dimensions(), 1);
}

#[test]
fn test_dimensions_2() {
    let v = Vector::<f32, 2>::new();
    assert_eq!(v.dimensions(), 2);
    assert_eq!(v.len(), 2);
    assert!(!v.is_empty());
}

#[test]
fn test_default_zero_fills() {
    let v = Vector::<f32, 3>::new();
    assert!(v.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_set_coordinate_0_to_1() {
    let mut v = Vector::<f32, 2>::new();
    v.set(0, 1.0).expect("index 0 is in range for dimension 2");
    assert!((v.get(0).expect("in range") - 1.0).abs() < 1e-6);
}

#[test]
fn test_set_coordinate_0_to_5() {
    let mut v = Vector::<f32, 2>::new();
    v.set(0, 5.0).expect("index 0 is in range for dimension 2");
    assert!((v.get(0).expect("in range") - 5.0).abs() < 1e-6);
}

#[test]
fn test_set_coordinate_1_to_3() {
    let mut v = Vector::<f32, 2>::new();
    v.set(1, 3.0).expect("index 1 is in range for dimension 2");
    assert!((v.get(1).expect("in range") - 3.0).abs() < 1e-6);
}

#[test]
fn test_get_coordinate_out_of_range() {
    let v = Vector::<f32, 2>::new();
    let err = v.get(300).expect_err("index 300 exceeds dimension 2");
    assert!(matches!(
        err,
        LinealError::IndexOutOfRange { index: 300, len: 2 }
    ));
}

#[test]
fn test_set_coordinate_out_of_range() {
    let mut v = Vector::<f32, 2>::new();
    let err = v
        .set(300, 0.0)
        .expect_err("index 300 exceeds dimension 2");
    assert!(matches!(
        err,
        LinealError::IndexOutOfRange { index: 300, len: 2 }
    ));
}

#[test]
#[should_panic]
fn test_index_sugar_out_of_range_panics() {
    let v = Vector::<f32, 2>::new();
    let _ = v[2];
}

#[test]
fn test_from_slice_exact() {
    let v = Vector::<f32, 3>::from_slice(&[1.0, 2.0, 3.0]);
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!((v[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_from_slice_extra_values_ignored() {
    let v = Vector::<f32, 2>::from_slice(&[1.0, 2.0, 99.0, 99.0]);
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!((v[1] - 2.0).abs() < 1e-6);
}

#[test]
fn test_from_slice_short_input_leaves_zeros() {
    let v = Vector::<f32, 3>::from_slice(&[7.0]);
    assert!((v[0] - 7.0).abs() < 1e-6);
    assert!((v[1] - 0.0).abs() < 1e-6);
    assert!((v[2] - 0.0).abs() < 1e-6);
}

#[test]
fn test_set_from_keeps_prior_values() {
    let mut v = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    v.set_from(&[9.0]);
    assert!((v[0] - 9.0).abs() < 1e-6);
    assert!((v[1] - 2.0).abs() < 1e-6);
    assert!((v[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_distance_3_4_5() {
    let a = Vector::<f32, 2>::from_array([0.0, 0.0]);
    let b = Vector::from_array([3.0, 4.0]);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
}

#[test]
fn test_distance_to_self_is_zero() {
    let a = Vector::<f32, 3>::from_array([1.5, -2.5, 4.0]);
    assert!(a.distance_to(&a).abs() < 1e-6);
}

#[test]
fn test_distance_is_symmetric() {
    let a = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let b = Vector::from_array([-4.0, 0.5, 2.0]);
    assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
}

#[test]
fn test_dot() {
    let a = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let b = Vector::from_array([4.0, 5.0, 6.0]);
    // 1*4 + 2*5 + 3*6 = 32
    assert!((a.dot(&b) - 32.0).abs() < 1e-6);
}

#[test]
fn test_mul_operator_is_dot_alias() {
    let a = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let b = Vector::from_array([4.0, 5.0, 6.0]);
    assert!((&a * &b - a.dot(&b)).abs() < 1e-6);
}

#[test]
fn test_cross_2d() {
    let a = Vector::<f32, 2>::from_array([1.0, 0.0]);
    let b = Vector::from_array([0.0, 1.0]);
    assert!((a.cross(&b) - 1.0).abs() < 1e-6);
    assert!((b.cross(&a) - (-1.0)).abs() < 1e-6);
}

#[test]
fn test_cross_3d_concrete() {
    let a = Vector::<f32, 3>::from_array([0.0, 1.0, 1.0]);
    let b = Vector::from_array([1.0, -1.0, 3.0]);
    assert_eq!(a.cross(&b), Vector::from_array([4.0, 1.0, -1.0]));
}

#[test]
fn test_norm() {
    let v = Vector::<f32, 2>::from_array([-3.0, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-6);
}

#[test]
fn test_sum_and_mean() {
    let v = Vector::<f32, 5>::from_array([2.0, 4.0, 6.0, 8.0, 10.0]);
    assert!((v.sum() - 30.0).abs() < 1e-6);
    assert!((v.mean() - 6.0).abs() < 1e-6);
}

#[test]
fn test_zeros_and_ones() {
    let z = Vector::<f32, 4>::zeros();
    assert!(z.as_slice().iter().all(|&x| x == 0.0));
    let o = Vector::<f32, 4>::ones();
    assert!((o.sum() - 4.0).abs() < 1e-6);
}

#[test]
fn test_add_sub_operators() {
    let a = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let b = Vector::from_array([4.0, 5.0, 6.0]);

    let sum = &a + &b;
    assert!((sum[0] - 5.0).abs() < 1e-6);
    assert!((sum[2] - 9.0).abs() < 1e-6);

    let diff = &b - &a;
    assert!((diff[0] - 3.0).abs() < 1e-6);
    assert!((diff[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_scalar_operators() {
    let v = Vector::<f32, 2>::from_array([2.0, -4.0]);

    let scaled = &v * 2.5;
    assert!((scaled[0] - 5.0).abs() < 1e-6);
    assert!((scaled[1] - (-10.0)).abs() < 1e-6);

    let halved = &v / 2.0;
    assert!((halved[0] - 1.0).abs() < 1e-6);
    assert!((halved[1] - (-2.0)).abs() < 1e-6);
}

#[test]
fn test_mul_scalar_div_scalar() {
    let v = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let scaled = v.mul_scalar(3.0);
    assert!((scaled[2] - 9.0).abs() < 1e-6);
    let back = scaled.div_scalar(3.0);
    assert!((back[2] - 3.0).abs() < 1e-6);
}

#[test]
fn test_index_mut_sugar() {
    let mut v = Vector::<f32, 2>::new();
    v[1] = 8.0;
    assert!((v[1] - 8.0).abs() < 1e-6);
}

#[test]
fn test_copy_is_deep() {
    let mut a = Vector::<f32, 2>::from_array([1.0, 2.0]);
    let b = a;
    a[0] = 99.0;
    assert!((b[0] - 1.0).abs() < 1e-6);
}
