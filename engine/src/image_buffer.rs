use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::api::{NoiseField, PixelBuffer, Result, TextureConfig, TextureSpec, CHANNELS};
use crate::fbm::Fbm;
use crate::interpolate::TileablePerlin;

const OPAQUE: u8 = u8::MAX;

/// Maps a clipped noise value in `[-1, 1]` to a gray level.
pub fn intensity(value: f64) -> u8 {
    ((value + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Renders a [`TextureSpec`] into an RGBA buffer whose edges wrap seamlessly.
#[derive(Debug, Clone)]
pub struct TextureBuilder {
    spec: TextureSpec,
    noise: Fbm<TileablePerlin>,
    scale_x: f64,
    scale_y: f64,
}

impl TextureBuilder {
    pub fn new(spec: TextureSpec) -> Self {
        let period = f64::from(spec.period().get());
        Self {
            noise: Fbm::new(TileablePerlin::new(spec.period()), spec.octaves()),
            scale_x: period / f64::from(spec.width()),
            scale_y: period / f64::from(spec.height()),
            spec,
        }
    }

    pub fn from_config(config: &TextureConfig) -> Result<Self> {
        config.validate().map(Self::new)
    }

    pub fn spec(&self) -> &TextureSpec {
        &self.spec
    }

    /// Noise-space coordinate of pixel `(px, py)` at the base octave.
    pub fn sample_point(&self, px: u32, py: u32) -> (f64, f64) {
        (f64::from(px) * self.scale_x, f64::from(py) * self.scale_y)
    }

    pub fn value_at(&self, px: u32, py: u32) -> f64 {
        let (x, y) = self.sample_point(px, py);
        self.noise.sample(x, y)
    }

    pub fn intensity_at(&self, px: u32, py: u32) -> u8 {
        intensity(self.value_at(px, py))
    }

    fn fill_row(&self, py: u32, row: &mut [u8]) {
        for (px, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let gray = self.intensity_at(px as u32, py);
            pixel.copy_from_slice(&[gray, gray, gray, OPAQUE]);
        }
    }

    /// Fills rows in parallel; each worker owns a disjoint row slice.
    pub fn build(&self) -> PixelBuffer {
        let started = Instant::now();
        debug!(
            width = self.spec.width(),
            height = self.spec.height(),
            octaves = self.spec.octaves(),
            period = self.spec.period().get(),
            "building noise texture"
        );
        let row_len = self.spec.row_len();
        let mut data = vec![0u8; self.spec.buffer_len()];
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(py, row)| self.fill_row(py as u32, row));
        info!(
            "Built {}x{} noise texture in {:.2?}",
            self.spec.width(),
            self.spec.height(),
            started.elapsed()
        );
        PixelBuffer::from_raw(self.spec.width(), self.spec.height(), data)
    }

    /// Single-threaded raster-order fill; output matches [`TextureBuilder::build`].
    pub fn build_sequential(&self) -> PixelBuffer {
        let row_len = self.spec.row_len();
        let mut data = vec![0u8; self.spec.buffer_len()];
        for (py, row) in data.chunks_mut(row_len).enumerate() {
            self.fill_row(py as u32, row);
        }
        PixelBuffer::from_raw(self.spec.width(), self.spec.height(), data)
    }
}

/// Validates `config` and renders it. Nothing is allocated on failure.
pub fn build_texture(config: &TextureConfig) -> Result<PixelBuffer> {
    Ok(TextureBuilder::from_config(config)?.build())
}

/// Renders a `width` x `height` texture at the default period.
pub fn build(width: i64, height: i64, octaves: i64) -> Result<PixelBuffer> {
    build_texture(&TextureConfig {
        width,
        height,
        octaves,
        ..TextureConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NoiseError, Period};

    #[test]
    fn intensity_mapping() {
        assert_eq!(intensity(-1.0), 0);
        assert_eq!(intensity(1.0), 255);
        assert_eq!(intensity(0.0), 128);
        assert_eq!(intensity(-0.0), 128);
    }

    #[test]
    fn default_sample_points() {
        let builder = TextureBuilder::new(TextureSpec::default());
        assert_eq!(builder.sample_point(0, 0), (0.0, 0.0));
        assert_eq!(builder.sample_point(400, 400), (5.0, 5.0));
        assert_eq!(builder.sample_point(80, 160), (1.0, 2.0));
    }

    #[test]
    fn axes_scale_independently() {
        let spec = TextureSpec::new(Period::new(4).unwrap(), 32, 16, 4).unwrap();
        let builder = TextureBuilder::new(spec);
        assert_eq!(builder.sample_point(8, 8), (1.0, 2.0));
    }

    #[test]
    fn known_pixels_at_defaults() {
        let builder = TextureBuilder::new(TextureSpec::default());
        assert_eq!(builder.intensity_at(0, 0), 128);
        assert_eq!(builder.intensity_at(1, 0), 130);
        assert_eq!(builder.intensity_at(123, 456), 166);
        assert_eq!(builder.intensity_at(799, 799), 122);
        assert_eq!(builder.intensity_at(37, 610), 95);
    }

    #[test]
    fn known_pixels_non_square() {
        let spec = TextureSpec::new(Period::new(4).unwrap(), 32, 16, 4).unwrap();
        let buffer = TextureBuilder::new(spec).build();
        assert_eq!(buffer.pixel(0, 0), Some([128, 128, 128, 255]));
        assert_eq!(buffer.pixel(5, 3), Some([97, 97, 97, 255]));
        assert_eq!(buffer.pixel(17, 9), Some([77, 77, 77, 255]));
    }

    #[test]
    fn builder_keeps_validated_spec() {
        let config = TextureConfig { period: 3, width: 12, height: 5, octaves: 2 };
        let builder = TextureBuilder::from_config(&config).unwrap();
        assert_eq!(TextureConfig::from(*builder.spec()), config);
        assert_eq!(builder.build().as_bytes().len(), builder.spec().buffer_len());
    }

    #[test]
    fn oversized_buffer_is_rejected() {
        let config = TextureConfig { period: 10, width: 1 << 31, height: 1 << 31, octaves: 0 };
        assert_eq!(
            build_texture(&config),
            Err(NoiseError::InvalidDimension { width: 1 << 31, height: 1 << 31 })
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let spec = TextureSpec::new(Period::new(6).unwrap(), 48, 30, 5).unwrap();
        let builder = TextureBuilder::new(spec);
        assert_eq!(builder.build(), builder.build_sequential());
    }

    #[test]
    fn build_rejects_before_work() {
        assert_eq!(
            build(0, 10, 3),
            Err(NoiseError::InvalidDimension { width: 0, height: 10 })
        );
        assert_eq!(
            build(10, -5, 3),
            Err(NoiseError::InvalidDimension { width: 10, height: -5 })
        );
        assert_eq!(build(10, 10, -2), Err(NoiseError::InvalidOctaveCount(-2)));
    }
}
