use super::*;

#[test]
fn test_vector3f64_basic() {
    let v = Vector3f64::new(1.0, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_vector3f64_zeros() {
    let mut v = Vector3f64::new(1.0, 2.0, 3.0);
    v.set_zeros();
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
    assert_eq!(v.z, 0.0);

    let w = Vector3f64::zeros();
    assert_eq!(w.x, 0.0);
    assert_eq!(w.y, 0.0);
    assert_eq!(w.z, 0.0);
}

#[test]
fn test_vector3f64_slice_views() {
    let mut v = Vector3f64::new(1.0, 2.0, 3.0);

    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);

    v.as_mut_slice()[0] = 10.0;
    assert_eq!(v.x, 10.0);
}

#[test]
fn test_vector3f64_dot_product() {
    let v1 = Vector3f64::new(1.0, 2.0, 3.0);
    let v2 = Vector3f64::new(4.0, 5.0, 6.0);

    assert_eq!(v1.dot_product(&v2), 32.0);
}

#[test]
fn test_vector3f64_cross_product() {
    let v1 = Vector3f64::new(1.0, 0.0, 0.0);
    let v2 = Vector3f64::new(0.0, 1.0, 0.0);

    let cross = v1.cross_product(&v2);

    assert_eq!(cross.x, 0.0);
    assert_eq!(cross.y, 0.0);
    assert_eq!(cross.z, 1.0);
}

#[test]
fn test_vector3f64_norms() {
    let v = Vector3f64::new(3.0, 4.0, 0.0);

    assert_eq!(v.norm_squared(), 25.0);
    assert_eq!(v.norm2(), 5.0);
}

#[test]
fn test_vector3f64_operators() {
    let v1 = Vector3f64::new(1.0, 2.0, 3.0);
    let v2 = Vector3f64::new(4.0, 5.0, 6.0);

    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);

    let scaled = 2.0 * v1;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);

    let halved = v1 / 2.0;
    assert_eq!(halved.x, 0.5);
    assert_eq!(halved.y, 1.0);
    assert_eq!(halved.z, 1.5);
}
