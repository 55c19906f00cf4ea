use kurbo::{CubicBez, Line, ParamCurve, Point, QuadBez, Rect};

use crate::foundation::core::ComplexSample;
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::path::command::{PathCommand, parse_path};

/// Sampling density and output extent for [`PathSampler`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Samples emitted per line, curve or arc command.
    pub subdivisions: usize,
    /// Output x range is `[-half_width, half_width]`.
    pub half_width: f64,
    /// Output y range is `[-half_height, half_height]`.
    pub half_height: f64,
    /// Map increasing source y to decreasing output y (SVG is y-down).
    pub flip_y: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::for_graph(80.0, 100.0, 10.0)
    }
}

impl SamplerConfig {
    /// Fit the outline inside a `width` x `height` graph centered on the origin,
    /// leaving `margin` units on every side.
    pub fn for_graph(width: f64, height: f64, margin: f64) -> Self {
        Self {
            subdivisions: 10,
            half_width: width / 2.0 - margin,
            half_height: height / 2.0 - margin,
            flip_y: true,
        }
    }

    /// Reject configurations that cannot produce finite samples.
    pub fn validate(&self) -> EpicycleResult<()> {
        if self.subdivisions == 0 {
            return Err(EpicycleError::validation(
                "sampler 'subdivisions' must be >= 1",
            ));
        }
        for (name, v) in [
            ("half_width", self.half_width),
            ("half_height", self.half_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(EpicycleError::validation(format!(
                    "sampler '{name}' must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Turns path data into a dense, normalized sample sequence.
#[derive(Clone, Debug, Default)]
pub struct PathSampler {
    config: SamplerConfig,
}

impl PathSampler {
    /// Build a sampler after validating `config`.
    pub fn new(config: SamplerConfig) -> EpicycleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Parse, flatten and scale `d` into the configured output extent.
    #[tracing::instrument(skip(self, d), fields(len = d.len()))]
    pub fn sample(&self, d: &str) -> EpicycleResult<Vec<ComplexSample>> {
        let mut samples = self.sample_unit(d)?;
        let sy = if self.config.flip_y {
            -self.config.half_height
        } else {
            self.config.half_height
        };
        for p in &mut samples {
            p.x *= self.config.half_width;
            p.y *= sy;
        }
        tracing::debug!(samples = samples.len(), "sampled path");
        Ok(samples)
    }

    /// Parse and flatten `d`, then map its bounding box onto `[-1, 1]²`.
    pub fn sample_unit(&self, d: &str) -> EpicycleResult<Vec<ComplexSample>> {
        let commands = parse_path(d)?;
        let mut samples = self.flatten(&commands);
        if samples.is_empty() {
            return Err(EpicycleError::validation(
                "path produced no samples (no drawing commands)",
            ));
        }
        normalize_unit(&mut samples);
        Ok(samples)
    }

    /// Flatten commands into raw (unnormalized) samples.
    ///
    /// `M`, `H` and `V` emit one sample each; `L`, `C`, `Q` and `A` emit
    /// `subdivisions` samples at `t = k / subdivisions` for `k` in `1..=subdivisions`.
    /// Arcs are interpolated as straight lines. `Z` contributes no samples and
    /// does not move the current point.
    pub fn flatten(&self, commands: &[PathCommand]) -> Vec<ComplexSample> {
        let steps = self.config.subdivisions;
        let mut out = Vec::with_capacity(commands.len() * steps + 1);
        let mut last = Point::ZERO;

        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(p.into());
                    last = p;
                }
                PathCommand::LineTo(to) => {
                    let line = Line::new(last, to);
                    emit_steps(&mut out, steps, |t| line.eval(t));
                    last = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let cubic = CubicBez::new(last, ctrl1, ctrl2, to);
                    emit_steps(&mut out, steps, |t| cubic.eval(t));
                    last = to;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    let quad = QuadBez::new(last, ctrl, to);
                    emit_steps(&mut out, steps, |t| quad.eval(t));
                    last = to;
                }
                PathCommand::ArcTo { to, .. } => {
                    let chord = Line::new(last, to);
                    emit_steps(&mut out, steps, |t| chord.eval(t));
                    last = to;
                }
                PathCommand::HorizontalTo(x) => {
                    last = Point::new(x, last.y);
                    out.push(last.into());
                }
                PathCommand::VerticalTo(y) => {
                    last = Point::new(last.x, y);
                    out.push(last.into());
                }
                // Emits nothing and leaves the current point in place.
                PathCommand::ClosePath => {}
            }
        }

        out
    }
}

fn emit_steps(out: &mut Vec<ComplexSample>, steps: usize, curve: impl Fn(f64) -> Point) {
    for k in 1..=steps {
        let t = k as f64 / steps as f64;
        out.push(curve(t).into());
    }
}

/// Rescale `samples` so their bounding box spans exactly `[-1, 1]` on each axis.
///
/// An axis with zero extent collapses to `0.0` instead of dividing by zero.
pub fn normalize_unit(samples: &mut [ComplexSample]) {
    let Some(first) = samples.first() else {
        return;
    };
    let first = Point::from(*first);
    let bounds = samples
        .iter()
        .fold(Rect::from_points(first, first), |r, p| r.union_pt(Point::from(*p)));

    let (w, h) = (bounds.width(), bounds.height());
    let x_degenerate = w <= f64::EPSILON;
    let y_degenerate = h <= f64::EPSILON;
    if x_degenerate || y_degenerate {
        tracing::warn!(
            width = w,
            height = h,
            "degenerate path bounds; collapsing zero-extent axis to 0"
        );
    }

    for p in samples.iter_mut() {
        p.x = if x_degenerate {
            0.0
        } else {
            (p.x - bounds.x0) / w * 2.0 - 1.0
        };
        p.y = if y_degenerate {
            0.0
        } else {
            (p.y - bounds.y0) / h * 2.0 - 1.0
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampler.rs"]
mod tests;
