#![allow(non_camel_case_types)]

// Scalar vocabulary shared by all crates in the workspace.

pub type c64 = num_complex::Complex<f64>;

#[test]
fn test_c64() {
    let z = c64 { re: 3.0, im: -4.0 };

    assert_eq!(z.norm_sqr(), 25.0);
    assert_eq!(z.conj(), c64::new(3.0, 4.0));
}
