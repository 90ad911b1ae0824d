//! Hashed gradient field over the wrapped integer lattice.
//!
//! Gradients come from integer mixing of the wrapped coordinate pair, so the
//! field needs no permutation table and no shared state.

use crate::api::Period;

const WORD_BITS: u32 = 32;
const ROTATION: u32 = WORD_BITS / 2;

const MIX_A: u32 = 3_284_157_443;
const MIX_B: u32 = 1_911_520_717;
const MIX_FINAL: u32 = 2_048_419_325;

// Kept at eight digits so pixel values match previously generated textures.
#[allow(clippy::approx_constant)]
const ANGLE_SCALE: f64 = 3.14159265 / 2147483647.0;

/// Unit gradient attached to one lattice node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub x: f64,
    pub y: f64,
}

impl Gradient {
    pub fn dot(self, dx: f64, dy: f64) -> f64 {
        dx * self.x + dy * self.y
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Mixes two wrapped lattice coordinates into one 32-bit word.
pub fn hash_lattice(ix: u32, iy: u32) -> u32 {
    let mut a = ix.wrapping_mul(MIX_A);
    let mut b = iy ^ a.rotate_left(ROTATION);
    b = b.wrapping_mul(MIX_B);
    a ^= b.rotate_left(ROTATION);
    a.wrapping_mul(MIX_FINAL)
}

/// Gradient at lattice node `(ix, iy)`; identical for coordinates congruent mod `period`.
pub fn gradient(period: Period, ix: i64, iy: i64) -> Gradient {
    let hash = hash_lattice(period.wrap(ix), period.wrap(iy));
    let angle = f64::from(hash) * ANGLE_SCALE;
    Gradient {
        x: angle.sin(),
        y: angle.cos(),
    }
}
