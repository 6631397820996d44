use mg_core::{Corner, GridCell, NoiseStrategy, Vec2};
use noise::NoiseFn;
use std::f64::consts::PI;

use crate::gradient::GradientField;

/// Smooth blend between `a` and `b`.
///
/// The weight follows half a cosine period, so the curve has zero slope at both
/// ends: `t = 0` yields `a`, `t = 1` yields `b`.
pub fn cos_interpolate(a: f64, b: f64, t: f64) -> f64 {
    let mu = (1.0 - (t * PI).cos()) / 2.0;
    (1.0 - mu) * a + mu * b
}

/// Seeded 2D gradient noise.
///
/// Each lattice point carries a unit gradient from [`GradientField`]; a sample
/// blends the four corner dot products of its enclosing cell with
/// [`cos_interpolate`]. Output is continuous, zero on every lattice point and
/// stays within roughly [-0.71, 0.71] for finite coordinates of any magnitude.
/// It is not clamped.
///
/// Non-finite coordinates produce NaN rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientNoise {
    field: GradientField,
}

impl GradientNoise {
    pub const fn new(seed: u32) -> Self {
        Self {
            field: GradientField::new(seed),
        }
    }

    pub const fn seed(&self) -> u32 {
        self.field.seed()
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    /// Sample the noise at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let point = Vec2::new(x, y);
        let origin = GridCell::containing(point);
        let sx = x - x.floor();
        let sy = y - y.floor();

        let [top_left, top_right, bottom_left, bottom_right] = Corner::ALL.map(|corner| {
            let (dx, dy) = corner.offset();
            let offset = Vec2::new(sx - dx as f64, sy - dy as f64);
            self.corner_product(offset, origin.corner(corner))
        });

        let top = cos_interpolate(top_left, top_right, sx);
        let bottom = cos_interpolate(bottom_left, bottom_right, sx);
        cos_interpolate(top, bottom, sy)
    }

    /// Dot product of the corner's gradient with the offset from that corner to the point.
    ///
    /// The offset is taken from the fractional position, never from the cell's
    /// integer coordinates, so it stays inside the unit square at any magnitude.
    fn corner_product(&self, offset: Vec2<f64>, cell: GridCell) -> f64 {
        let angle = self.field.angle_at(cell);
        offset.x * angle.cos() + offset.y * angle.sin()
    }
}

impl NoiseFn<f64, 2> for GradientNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

impl NoiseStrategy for GradientNoise {
    fn generate(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y)
    }

    fn name(&self) -> &'static str {
        "Gradient"
    }
}
