use crate::api::{NoiseField, Period};
use crate::lattice::Cell;

/// Blends `a` into `b` along a smoothstep curve; `t` is clamped to `[0, 1]`.
///
/// The curve `t²(3 - 2t)` has zero slope at both ends, which keeps cell
/// borders from showing up as creases.
pub fn smoothstep_blend(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let smooth = t * t * (3.0 - 2.0 * t);
    a + (b - a) * smooth
}

/// Single-octave gradient noise whose lattice repeats every `period` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileablePerlin {
    period: Period,
}

impl TileablePerlin {
    pub fn new(period: Period) -> Self {
        Self { period }
    }
}

impl NoiseField for TileablePerlin {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let cell = Cell::locate(x, y);
        let c = cell.corners(self.period, x, y);
        let bottom = smoothstep_blend(c.n00, c.n10, cell.sx);
        let top = smoothstep_blend(c.n01, c.n11, cell.sx);
        smoothstep_blend(bottom, top, cell.sy)
    }
}
