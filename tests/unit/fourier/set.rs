use super::*;

fn comp(harmonic: i32, amplitude: f64) -> HarmonicComponent {
    HarmonicComponent::from_coefficient(harmonic, ComplexSample::new(amplitude, 0.0), 1.0)
}

fn set() -> ComponentSet {
    ComponentSet::new(vec![comp(-1, 0.5), comp(0, 2.0), comp(1, 1.0), comp(2, 1.0)], 1.0, 4)
}

#[test]
fn new_sorts_by_descending_amplitude_stably() {
    let s = set();
    let order: Vec<i32> = s.iter().map(|c| c.harmonic).collect();
    assert_eq!(order, vec![0, 1, 2, -1]);
}

#[test]
fn evaluate_is_sum_of_components() {
    let s = set();
    let t = 0.37;
    let manual: ComplexSample = s
        .iter()
        .map(|c| c.evaluate(t))
        .fold(ComplexSample::ZERO, |a, b| a + b);
    assert_eq!(s.evaluate(t), manual);
}

#[test]
fn partial_sums_end_at_evaluate() {
    let s = set();
    let sums: Vec<_> = s.partial_sums(0.1).collect();
    assert_eq!(sums.len(), s.len());
    assert_eq!(sums[0], s.as_slice()[0].evaluate(0.1));
    assert_eq!(*sums.last().unwrap(), s.evaluate(0.1));
}

#[test]
fn arms_chain_tip_to_tail() {
    let s = set();
    let arms: Vec<_> = s.arms(0.6).collect();
    assert_eq!(arms.len(), s.len());
    assert_eq!(arms[0].0, ComplexSample::ZERO);
    for pair in arms.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
}

#[test]
fn truncated_keeps_dominant_components() {
    let s = set().truncated(2);
    assert_eq!(s.len(), 2);
    assert_eq!(s.as_slice()[0].harmonic, 0);
    assert_eq!(s.as_slice()[1].harmonic, 1);
    assert!(set().truncated(99).len() == 4);
}

#[test]
fn dc_lookup_and_timing() {
    let s = ComponentSet::new(vec![comp(0, 1.0)], 35.0, 70);
    assert_eq!(s.dc().map(|c| c.harmonic), Some(0));
    assert_eq!(s.period(), 35.0);
    assert_eq!(s.sample_time(0), 0.0);
    assert_eq!(s.sample_time(2), 34.0);
    assert_eq!(s.sample_time(70), 0.0);
}

#[test]
fn empty_set_evaluates_to_origin() {
    let s = ComponentSet::new(Vec::new(), 35.0, 0);
    assert!(s.is_empty());
    assert_eq!(s.evaluate(1.0), ComplexSample::ZERO);
    assert_eq!(s.sample_time(3), 0.0);
    assert_eq!((&s).into_iter().count(), 0);
}
