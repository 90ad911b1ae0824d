use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read config {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported config format for {} (expected .ron or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid RON config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Noise(#[from] tile_noise::NoiseError),
    #[error("pixel buffer does not fit a {width}x{height} RGBA image")]
    BufferShape { width: u32, height: u32 },
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),
}
