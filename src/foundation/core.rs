use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

pub use kurbo::{Point, Vec2};

/// A planar point that doubles as a complex number (`x` real, `y` imaginary).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComplexSample {
    /// Real part / horizontal coordinate.
    pub x: f64,
    /// Imaginary part / vertical coordinate.
    pub y: f64,
}

impl ComplexSample {
    /// The origin, `0 + 0i`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Construct from cartesian parts.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct from magnitude and angle (radians).
    pub fn from_polar(norm: f64, arg: f64) -> Self {
        let (sin, cos) = arg.sin_cos();
        Self {
            x: norm * cos,
            y: norm * sin,
        }
    }

    /// Magnitude `sqrt(x² + y²)`.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians, `atan2(y, x)`.
    pub fn arg(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    /// True when both parts are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for ComplexSample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for ComplexSample {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for ComplexSample {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for ComplexSample {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Sum for ComplexSample {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Point> for ComplexSample {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<ComplexSample> for Point {
    fn from(c: ComplexSample) -> Self {
        Point::new(c.x, c.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
