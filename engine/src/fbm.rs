//! Fractal Brownian motion over a single-octave [`NoiseField`].

use crate::api::NoiseField;

/// Frequency multiplier between consecutive octaves.
pub const LACUNARITY: f64 = 2.0;
/// Amplitude multiplier between consecutive octaves.
pub const PERSISTENCE: f64 = 0.5;
/// Applied to the octave sum before clipping to `[-1, 1]`.
pub const CONTRAST_GAIN: f64 = 1.2;

/// Sums `octaves` layers of `field`, each at twice the frequency and half the
/// amplitude of the last, then applies the contrast gain and clips.
///
/// Zero octaves yields `0.0`.
pub fn fbm<F: NoiseField + ?Sized>(field: &F, x: f64, y: f64, octaves: u32) -> f64 {
    let mut total: f64 = 0.0;
    let mut frequency: f64 = 1.0;
    let mut amplitude: f64 = 1.0;
    for _ in 0..octaves {
        total += field.sample(x * frequency, y * frequency) * amplitude;
        frequency *= LACUNARITY;
        amplitude *= PERSISTENCE;
    }
    (total * CONTRAST_GAIN).clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fbm<F> {
    field: F,
    octaves: u32,
}

impl<F: NoiseField> Fbm<F> {
    pub fn new(field: F, octaves: u32) -> Self {
        Self { field, octaves }
    }
}

impl<F: NoiseField> NoiseField for Fbm<F> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        fbm(&self.field, x, y, self.octaves)
    }
}
