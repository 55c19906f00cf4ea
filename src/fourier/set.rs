use crate::foundation::core::ComplexSample;
use crate::fourier::component::HarmonicComponent;

/// Harmonic components sorted by descending amplitude.
///
/// Evaluating the set sums every phasor in order; [`ComponentSet::partial_sums`]
/// exposes the running tips so each phasor can be drawn from the previous tip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComponentSet {
    components: Vec<HarmonicComponent>,
    frequency_scale: f64,
    sample_count: usize,
}

impl ComponentSet {
    /// Sort `components` (stable, descending amplitude) into a set.
    pub fn new(
        mut components: Vec<HarmonicComponent>,
        frequency_scale: f64,
        sample_count: usize,
    ) -> Self {
        components.sort_by(HarmonicComponent::cmp_amplitude_desc);
        Self {
            components,
            frequency_scale,
            sample_count,
        }
    }

    /// Superposition of every component at time `t`.
    pub fn evaluate(&self, t: f64) -> ComplexSample {
        self.components.iter().map(|c| c.evaluate(t)).sum()
    }

    /// Running sum after each component, in draw order. The last item equals
    /// [`ComponentSet::evaluate`].
    pub fn partial_sums(&self, t: f64) -> impl Iterator<Item = ComplexSample> + '_ {
        self.components.iter().scan(ComplexSample::ZERO, move |acc, c| {
            *acc += c.evaluate(t);
            Some(*acc)
        })
    }

    /// `(start, end)` of each phasor arm at time `t`; each arm starts at the
    /// previous arm's end, the first at the origin.
    pub fn arms(&self, t: f64) -> impl Iterator<Item = (ComplexSample, ComplexSample)> + '_ {
        let starts = std::iter::once(ComplexSample::ZERO).chain(self.partial_sums(t));
        starts.zip(self.partial_sums(t))
    }

    /// Time for one full traversal of the outline.
    pub fn period(&self) -> f64 {
        self.frequency_scale
    }

    /// Time in `[0, period)` at which sample `k` of the decomposed sequence is
    /// reproduced. Samples are visited in reverse order, so this is
    /// `(N - k) · frequency_scale / N` wrapped into one period.
    pub fn sample_time(&self, k: usize) -> f64 {
        let n = self.sample_count;
        if n == 0 {
            return 0.0;
        }
        let steps = (n - k % n) % n;
        steps as f64 * self.frequency_scale / n as f64
    }

    /// Scale dividing DFT indices into frequencies.
    pub fn frequency_scale(&self) -> f64 {
        self.frequency_scale
    }

    /// Length of the sample sequence this set was computed from.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The mean term, if it is part of the set.
    pub fn dc(&self) -> Option<&HarmonicComponent> {
        self.components.iter().find(|c| c.is_dc())
    }

    /// Keep only the `count` dominant components.
    pub fn truncated(&self, count: usize) -> Self {
        Self {
            components: self.components.iter().take(count).copied().collect(),
            frequency_scale: self.frequency_scale,
            sample_count: self.sample_count,
        }
    }

    /// Components in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, HarmonicComponent> {
        self.components.iter()
    }

    /// Components in draw order.
    pub fn as_slice(&self) -> &[HarmonicComponent] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the set holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a HarmonicComponent;
    type IntoIter = std::slice::Iter<'a, HarmonicComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/set.rs"]
mod tests;
