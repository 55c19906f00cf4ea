use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::foundation::core::ComplexSample;

/// A single rotating phasor: `amplitude · e^{i(2π·frequency·t + phase)}`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HarmonicComponent {
    /// Phasor radius (`|c_n|`).
    pub amplitude: f64,
    /// Raw DFT index `n`.
    pub harmonic: i32,
    /// Turns per unit time, `n / frequency_scale`. Zero for the mean term.
    pub frequency: f64,
    /// Phase offset in radians at `t = 0`.
    pub phase: f64,
}

impl HarmonicComponent {
    /// Build a component from its DFT index, coefficient and frequency scale.
    pub fn from_coefficient(
        harmonic: i32,
        coefficient: ComplexSample,
        frequency_scale: f64,
    ) -> Self {
        Self {
            amplitude: coefficient.norm(),
            harmonic,
            frequency: f64::from(harmonic) / frequency_scale,
            phase: coefficient.arg(),
        }
    }

    /// Tip of this phasor at time `t`, relative to its own origin.
    pub fn evaluate(&self, t: f64) -> ComplexSample {
        ComplexSample::from_polar(self.amplitude, TAU * self.frequency * t + self.phase)
    }

    /// True for the constant (mean) term.
    pub fn is_dc(&self) -> bool {
        self.harmonic == 0
    }

    /// Descending-amplitude order: larger phasors sort first.
    pub fn cmp_amplitude_desc(&self, other: &Self) -> Ordering {
        other.amplitude.abs().total_cmp(&self.amplitude.abs())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/component.rs"]
mod tests;
