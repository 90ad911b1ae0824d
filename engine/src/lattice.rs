use crate::api::Period;
use crate::gradient::gradient;

/// Dot product of the gradient at `(ix, iy)` with the offset from that node to `(x, y)`.
pub fn corner_contribution(period: Period, ix: i64, iy: i64, x: f64, y: f64) -> f64 {
    let dx = x - ix as f64;
    let dy = y - iy as f64;
    gradient(period, ix, iy).dot(dx, dy)
}

/// Lattice cell containing a sample point, plus the point's offset inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x0: i64,
    pub y0: i64,
    pub sx: f64,
    pub sy: f64,
}

/// Contributions of the four cell corners, named by `(dx, dy)` from the lower node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub n00: f64,
    pub n10: f64,
    pub n01: f64,
    pub n11: f64,
}

impl Cell {
    pub fn locate(x: f64, y: f64) -> Self {
        let fx = x.floor();
        let fy = y.floor();
        Self {
            x0: fx as i64,
            y0: fy as i64,
            sx: x - fx,
            sy: y - fy,
        }
    }

    pub fn x1(&self) -> i64 {
        self.x0 + 1
    }

    pub fn y1(&self) -> i64 {
        self.y0 + 1
    }

    pub fn corners(&self, period: Period, x: f64, y: f64) -> Corners {
        Corners {
            n00: corner_contribution(period, self.x0, self.y0, x, y),
            n10: corner_contribution(period, self.x1(), self.y0, x, y),
            n01: corner_contribution(period, self.x0, self.y1(), x, y),
            n11: corner_contribution(period, self.x1(), self.y1(), x, y),
        }
    }
}
