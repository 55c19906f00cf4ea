use super::*;
use crate::foundation::error::EpicycleError;

#[test]
fn decompose_path_uses_configured_band() {
    let mut cfg = EpicycleConfig::default();
    cfg.decomposer.half_range = 5;
    let set = decompose_path("M 0 0 L 10 0 L 10 10 Z", &cfg).unwrap();
    assert_eq!(set.len(), 11);
    assert_eq!(set.sample_count(), 21);
}

#[test]
fn decompose_svg_surfaces_missing_path() {
    let err = decompose_svg("<svg/>", &EpicycleConfig::default()).unwrap_err();
    assert!(matches!(err, EpicycleError::NoPath(_)));
}

#[test]
fn decompose_svg_surfaces_parse_errors() {
    let err = decompose_svg(r#"<path d="M 0 0 L 1"/>"#, &EpicycleConfig::default()).unwrap_err();
    assert!(matches!(err, EpicycleError::Parse { .. }));
}

#[test]
fn invalid_config_fails_before_sampling() {
    let mut cfg = EpicycleConfig::default();
    cfg.sampler.subdivisions = 0;
    let err = decompose_path("M 0 0 L 1 1", &cfg).unwrap_err();
    assert!(matches!(err, EpicycleError::Validation(_)));
}
