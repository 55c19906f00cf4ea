use super::*;

#[test]
fn add_is_componentwise() {
    let a = ComplexSample::new(1.5, -2.0);
    let b = ComplexSample::new(0.5, 4.0);
    assert_eq!(a + b, ComplexSample::new(2.0, 2.0));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn sum_of_empty_iterator_is_zero() {
    let total: ComplexSample = std::iter::empty().sum();
    assert_eq!(total, ComplexSample::ZERO);
}

#[test]
fn polar_roundtrip() {
    let c = ComplexSample::from_polar(2.0, std::f64::consts::FRAC_PI_3);
    assert!((c.norm() - 2.0).abs() < 1e-12);
    assert!((c.arg() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
}

#[test]
fn kurbo_point_conversion_preserves_parts() {
    let p = Point::new(3.0, -7.25);
    let c = ComplexSample::from(p);
    assert_eq!(c, ComplexSample::new(3.0, -7.25));
    assert_eq!(Point::from(c), p);
}
