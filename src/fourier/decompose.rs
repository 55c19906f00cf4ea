use std::f64::consts::TAU;

use anyhow::Context;
use rayon::prelude::*;

use crate::foundation::core::ComplexSample;
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::fourier::component::HarmonicComponent;
use crate::fourier::set::ComponentSet;

/// Frequency band and execution settings for [`Decomposer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DecomposerConfig {
    /// `K`: components are computed for every DFT index in `[-K, K]`.
    pub half_range: u32,
    /// Divides a DFT index into turns per unit time; also the traversal period.
    pub frequency_scale: f64,
    /// Compute coefficients on a dedicated rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only). `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            half_range: 100,
            frequency_scale: 35.0,
            parallel: false,
            threads: None,
        }
    }
}

impl DecomposerConfig {
    /// Reject configurations that would produce non-finite frequencies.
    pub fn validate(&self) -> EpicycleResult<()> {
        if !self.frequency_scale.is_finite() || self.frequency_scale <= 0.0 {
            return Err(EpicycleError::validation(format!(
                "decomposer 'frequency_scale' must be finite and > 0 (got {})",
                self.frequency_scale
            )));
        }
        if i32::try_from(self.half_range).is_err() {
            return Err(EpicycleError::validation(
                "decomposer 'half_range' does not fit a DFT index",
            ));
        }
        if self.threads == Some(0) {
            return Err(EpicycleError::validation(
                "decomposer 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Computes the normalized DFT of a sample sequence as a [`ComponentSet`].
#[derive(Clone, Debug, Default)]
pub struct Decomposer {
    config: DecomposerConfig,
}

impl Decomposer {
    /// Build a decomposer after validating `config`.
    pub fn new(config: DecomposerConfig) -> EpicycleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// One component per index in `[-K, K]`, sorted by descending amplitude.
    ///
    /// The sequence is treated as one period of a periodic signal. Evaluating
    /// the result at [`ComponentSet::sample_time`]`(k)` reproduces sample `k`
    /// when `K` covers the whole spectrum.
    #[tracing::instrument(skip(self, samples), fields(samples = samples.len()))]
    pub fn decompose(&self, samples: &[ComplexSample]) -> EpicycleResult<ComponentSet> {
        if samples.is_empty() {
            return Err(EpicycleError::validation(
                "cannot decompose an empty sample sequence",
            ));
        }
        let k = i32::try_from(self.config.half_range).map_err(|_| {
            EpicycleError::validation("decomposer 'half_range' does not fit a DFT index")
        })?;
        let scale = self.config.frequency_scale;
        let component =
            |n: i32| HarmonicComponent::from_coefficient(n, dft_coefficient(samples, n), scale);

        let components: Vec<HarmonicComponent> = if self.config.parallel {
            let pool = build_thread_pool(self.config.threads)?;
            pool.install(|| (-k..=k).into_par_iter().map(component).collect())
        } else {
            (-k..=k).map(component).collect()
        };

        tracing::debug!(components = components.len(), "decomposed samples");
        Ok(ComponentSet::new(components, scale, samples.len()))
    }
}

/// `c_n = (1/N) Σ_t (x_t cos θ + y_t sin θ) + i·(y_t cos θ − x_t sin θ)` with
/// `θ = −2π·n·t/N`.
///
/// With this sign the summed phasors visit the samples in reverse index order;
/// [`ComponentSet::sample_time`] accounts for it.
pub fn dft_coefficient(samples: &[ComplexSample], n: i32) -> ComplexSample {
    let len = samples.len() as f64;
    let mut re = 0.0;
    let mut im = 0.0;
    for (t, p) in samples.iter().enumerate() {
        let theta = -TAU * f64::from(n) * (t as f64 / len);
        let (sin, cos) = theta.sin_cos();
        re += p.x * cos + p.y * sin;
        im += p.y * cos - p.x * sin;
    }
    ComplexSample::new(re / len, im / len)
}

fn build_thread_pool(threads: Option<usize>) -> EpicycleResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("build rayon thread pool for DFT")?;
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/decompose.rs"]
mod tests;
