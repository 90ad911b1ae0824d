use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PERIOD: u32 = 10;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_OCTAVES: u32 = 6;

/// Past this many octaves the halved amplitude no longer changes an `f64` sum.
pub const MAX_OCTAVES: u32 = 64;

/// Bytes per pixel in a [`PixelBuffer`] (RGBA).
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoiseError {
    #[error("invalid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i64, height: i64 },
    #[error("invalid octave count {0}: expected 0..=64")]
    InvalidOctaveCount(i64),
    #[error("invalid period {0}: must be positive")]
    InvalidPeriod(i64),
}

pub type Result<T> = std::result::Result<T, NoiseError>;

/// Tiling period of the gradient lattice, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period(u32);

impl Period {
    pub fn new(value: i64) -> Result<Self> {
        match u32::try_from(value) {
            Ok(period) if period > 0 => Ok(Self(period)),
            _ => Err(NoiseError::InvalidPeriod(value)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Wraps a lattice coordinate into `[0, period)`, negatives included.
    pub fn wrap(self, coord: i64) -> u32 {
        coord.rem_euclid(i64::from(self.0)) as u32
    }
}

impl Default for Period {
    fn default() -> Self {
        Self(DEFAULT_PERIOD)
    }
}

/// RGBA byte count of a `width` x `height` raster, `None` if it overflows `usize`.
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
}

/// Raw texture parameters as they come from a config file or caller.
///
/// Fields are signed so that out-of-range values survive deserialization and
/// are reported by [`TextureConfig::validate`] with the matching error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub period: i64,
    pub width: i64,
    pub height: i64,
    pub octaves: i64,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            period: i64::from(DEFAULT_PERIOD),
            width: i64::from(DEFAULT_WIDTH),
            height: i64::from(DEFAULT_HEIGHT),
            octaves: i64::from(DEFAULT_OCTAVES),
        }
    }
}

impl TextureConfig {
    pub fn validate(&self) -> Result<TextureSpec> {
        let period = Period::new(self.period)?;
        let (width, height) = match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 && buffer_len(w, h).is_some() => (w, h),
            _ => {
                return Err(NoiseError::InvalidDimension {
                    width: self.width,
                    height: self.height,
                })
            }
        };
        let octaves = match u32::try_from(self.octaves) {
            Ok(o) if o <= MAX_OCTAVES => o,
            _ => return Err(NoiseError::InvalidOctaveCount(self.octaves)),
        };
        Ok(TextureSpec { period, width, height, octaves })
    }
}

impl From<TextureSpec> for TextureConfig {
    fn from(spec: TextureSpec) -> Self {
        Self {
            period: i64::from(spec.period.get()),
            width: i64::from(spec.width),
            height: i64::from(spec.height),
            octaves: i64::from(spec.octaves),
        }
    }
}

/// Validated texture parameters. Only obtainable through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSpec {
    period: Period,
    width: u32,
    height: u32,
    octaves: u32,
}

impl TextureSpec {
    pub fn new(period: Period, width: u32, height: u32, octaves: u32) -> Result<Self> {
        TextureConfig {
            period: i64::from(period.get()),
            width: i64::from(width),
            height: i64::from(height),
            octaves: i64::from(octaves),
        }
        .validate()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Size of the finished buffer in bytes; validation guarantees it fits.
    pub fn buffer_len(&self) -> usize {
        self.row_len() * self.height as usize
    }
}

impl Default for TextureSpec {
    fn default() -> Self {
        Self {
            period: Period::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            octaves: DEFAULT_OCTAVES,
        }
    }
}

/// Finished RGBA8 raster, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, px: u32, py: u32) -> Option<[u8; CHANNELS]> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let start = (py as usize * self.width as usize + px as usize) * CHANNELS;
        let mut out = [0u8; CHANNELS];
        out.copy_from_slice(&self.data[start..start + CHANNELS]);
        Some(out)
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(CHANNELS)
    }
}

/// A continuous 2D scalar field sampled at real coordinates.
pub trait NoiseField: Send + Sync {
    fn sample(&self, x: f64, y: f64) -> f64;
}
