use super::*;

fn raw(d: &str) -> Vec<ComplexSample> {
    PathSampler::default().flatten(&parse_path(d).unwrap())
}

#[test]
fn line_yields_move_plus_subdivisions() {
    let s = raw("M 0 0 L 10 0");
    assert_eq!(s.len(), 11);
    assert_eq!(s[0], ComplexSample::new(0.0, 0.0));
    assert!((s[1].x - 1.0).abs() < 1e-12);
    assert!((s[10].x - 10.0).abs() < 1e-12);
}

#[test]
fn cubic_yields_move_plus_subdivisions_and_ends_on_endpoint() {
    let s = raw("M 0 0 C 0 10 10 10 10 0");
    assert_eq!(s.len(), 11);
    let end = s[10];
    assert!((end.x - 10.0).abs() < 1e-12 && end.y.abs() < 1e-12);
    // B(1/2) = (P0 + 3P1 + 3P2 + P3) / 8
    assert!((s[5].x - 5.0).abs() < 1e-12);
    assert!((s[5].y - 7.5).abs() < 1e-12);
}

#[test]
fn quad_follows_quadratic_basis() {
    let s = raw("M 0 0 Q 5 10 10 0");
    assert_eq!(s.len(), 11);
    // B(1/2) = (P0 + 2P1 + P2) / 4
    assert!((s[5].x - 5.0).abs() < 1e-12);
    assert!((s[5].y - 5.0).abs() < 1e-12);
}

#[test]
fn arc_is_flattened_as_a_straight_chord() {
    let s = raw("M 0 0 A 5 5 0 0 1 10 0");
    assert_eq!(s.len(), 11);
    assert!(s.iter().all(|p| p.y.abs() < 1e-12));
    assert!((s[3].x - 3.0).abs() < 1e-12);
}

#[test]
fn horizontal_and_vertical_emit_one_sample_each() {
    let s = raw("M 1 2 H 5 V 7");
    assert_eq!(
        s,
        vec![
            ComplexSample::new(1.0, 2.0),
            ComplexSample::new(5.0, 2.0),
            ComplexSample::new(5.0, 7.0),
        ]
    );
}

#[test]
fn close_path_emits_nothing_and_keeps_current_point() {
    let s = raw("M 0 0 L 10 0 Z L 5 5");
    // M(1) + L(10) + Z(0) + L(10)
    assert_eq!(s.len(), 21);
    // The second line starts from (10, 0), not from the subpath start.
    assert!((s[11].x - 9.5).abs() < 1e-12);
    assert!((s[11].y - 0.5).abs() < 1e-12);
}

#[test]
fn subdivision_count_is_configurable() {
    let sampler = PathSampler::new(SamplerConfig {
        subdivisions: 4,
        ..SamplerConfig::default()
    })
    .unwrap();
    let s = sampler.flatten(&parse_path("M 0 0 L 4 4 Q 1 1 0 0").unwrap());
    assert_eq!(s.len(), 1 + 4 + 4);
}

#[test]
fn unit_normalization_hits_extremes_exactly() {
    let s = PathSampler::default()
        .sample_unit("M 3 -2 C 10 5 -4 8 7 12 L 20 1")
        .unwrap();
    let min_x = s.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = s.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = s.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = s.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!((min_x, max_x, min_y, max_y), (-1.0, 1.0, -1.0, 1.0));
}

#[test]
fn degenerate_axis_collapses_to_zero() {
    let s = PathSampler::default().sample_unit("M 0 5 L 10 5").unwrap();
    assert!(s.iter().all(|p| p.y == 0.0 && p.is_finite()));
    assert_eq!(s[0].x, -1.0);
    assert_eq!(s[10].x, 1.0);
}

#[test]
fn single_point_is_finite() {
    let s = PathSampler::default().sample("M 4 4").unwrap();
    assert_eq!(s, vec![ComplexSample::ZERO]);
}

#[test]
fn sample_scales_to_extent_and_flips_y() {
    let s = PathSampler::default().sample("M 0 0 L 10 20").unwrap();
    assert_eq!(s[0], ComplexSample::new(-30.0, 40.0));
    assert_eq!(s[10], ComplexSample::new(30.0, -40.0));
}

#[test]
fn sample_without_flip_keeps_orientation() {
    let sampler = PathSampler::new(SamplerConfig {
        flip_y: false,
        ..SamplerConfig::default()
    })
    .unwrap();
    let s = sampler.sample("M 0 0 L 10 20").unwrap();
    assert_eq!(s[0], ComplexSample::new(-30.0, -40.0));
}

#[test]
fn empty_path_is_a_validation_error() {
    let err = PathSampler::default().sample("Z").unwrap_err();
    assert!(matches!(err, EpicycleError::Validation(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let err = PathSampler::new(SamplerConfig {
        subdivisions: 0,
        ..SamplerConfig::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("subdivisions"));

    let err = SamplerConfig {
        half_width: f64::NAN,
        ..SamplerConfig::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("half_width"));
}
