use crate::foundation::core::ComplexSample;
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::trail::buffer::TrailBuffer;

/// Largest number of points a trail may keep.
pub const MAX_TRAIL_CAPACITY: usize = 1 << 20;

/// Pacing and length of a recorded trail, in the same time units as
/// [`ComponentSet::evaluate`](crate::ComponentSet::evaluate).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Minimum time between recorded points.
    pub interval: f64,
    /// Time span the trail covers; capacity is `duration / interval`.
    pub duration: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            interval: 0.005,
            duration: 30.0,
        }
    }
}

impl TrailConfig {
    /// Reject non-positive or non-finite timings.
    pub fn validate(&self) -> EpicycleResult<()> {
        for (name, v) in [("interval", self.interval), ("duration", self.duration)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(EpicycleError::validation(format!(
                    "trail '{name}' must be finite and > 0 (got {v})"
                )));
            }
        }
        let points = self.duration / self.interval;
        if points > MAX_TRAIL_CAPACITY as f64 {
            return Err(EpicycleError::validation(format!(
                "trail would keep {points} points (max {MAX_TRAIL_CAPACITY})"
            )));
        }
        Ok(())
    }

    /// Number of points the trail keeps (at least one).
    pub fn capacity(&self) -> usize {
        ((self.duration / self.interval) as usize).max(1)
    }
}

/// Records evaluated points at a fixed minimum interval into a [`TrailBuffer`].
#[derive(Clone, Debug)]
pub struct TrailRecorder {
    buffer: TrailBuffer<ComplexSample>,
    interval: f64,
    last_time: f64,
}

impl TrailRecorder {
    /// Start a trail at `first_time`; every slot begins at `first_point`.
    pub fn new(
        config: &TrailConfig,
        first_time: f64,
        first_point: ComplexSample,
    ) -> EpicycleResult<Self> {
        config.validate()?;
        Ok(Self {
            buffer: TrailBuffer::filled(config.capacity(), first_point)?,
            interval: config.interval,
            last_time: first_time,
        })
    }

    /// Record `point` if more than one interval has passed since the last
    /// recorded point. Returns whether it was recorded.
    pub fn observe(&mut self, t: f64, point: ComplexSample) -> bool {
        if t - self.last_time > self.interval {
            self.buffer.push(point);
            self.last_time = t;
            true
        } else {
            false
        }
    }

    /// Recorded points, oldest first.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = &ComplexSample> + '_ {
        self.buffer.iter()
    }

    /// Points paired with an opacity in `[0, 1)` that rises linearly from
    /// zero at the oldest point.
    pub fn faded(&self) -> impl Iterator<Item = (ComplexSample, f64)> + '_ {
        let step = 1.0 / self.buffer.capacity() as f64;
        self.buffer
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, i as f64 * step))
    }

    /// Underlying ring.
    pub fn buffer(&self) -> &TrailBuffer<ComplexSample> {
        &self.buffer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/recorder.rs"]
mod tests;
