use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tile_noise::PixelBuffer;
use tracing::info;

use crate::error::ExportError;

pub const DEFAULT_OUTPUT: &str = "noise.png";

/// Forces a `.png` extension, appending or replacing as needed.
pub fn png_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => path.to_path_buf(),
        _ => path.with_extension("png"),
    }
}

pub fn to_rgba_image(buffer: PixelBuffer) -> Result<RgbaImage, ExportError> {
    let (width, height) = (buffer.width(), buffer.height());
    RgbaImage::from_raw(width, height, buffer.into_raw())
        .ok_or(ExportError::BufferShape { width, height })
}

/// Writes `buffer` as PNG and returns the path actually written.
pub fn save_png(buffer: PixelBuffer, path: &Path) -> Result<PathBuf, ExportError> {
    let path = png_path(path);
    let image = to_rgba_image(buffer)?;
    image.save_with_format(&path, ImageFormat::Png)?;
    info!("Image saved to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_noise::{build_texture, TextureConfig};

    fn small_buffer() -> PixelBuffer {
        build_texture(&TextureConfig { period: 3, width: 9, height: 6, octaves: 3 }).unwrap()
    }

    #[test]
    fn output_always_named_png() {
        assert_eq!(png_path(Path::new("out")), PathBuf::from("out.png"));
        assert_eq!(png_path(Path::new("out.png")), PathBuf::from("out.png"));
        assert_eq!(png_path(Path::new("out.PNG")), PathBuf::from("out.PNG"));
        assert_eq!(png_path(Path::new("dir/tile.bmp")), PathBuf::from("dir/tile.png"));
    }

    #[test]
    fn other_extension_saved_as_png() {
        let name = format!("tile_export_ext_{}.bmp", std::process::id());
        let requested = std::env::temp_dir().join(name);
        let written = save_png(small_buffer(), &requested).unwrap();
        assert_eq!(written, requested.with_extension("png"));
        assert_eq!(image::ImageFormat::from_path(&written).unwrap(), ImageFormat::Png);
        let bytes = std::fs::read(&written).unwrap();
        std::fs::remove_file(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert!(!requested.exists());
    }

    #[test]
    fn converts_to_rgba_image() {
        let buffer = small_buffer();
        let expected = buffer.pixel(4, 2).unwrap();
        let image = to_rgba_image(buffer).unwrap();
        assert_eq!(image.dimensions(), (9, 6));
        assert_eq!(image.get_pixel(4, 2).0, expected);
    }

    #[test]
    fn png_roundtrip() {
        let buffer = small_buffer();
        let stem = std::env::temp_dir().join(format!("tile_export_png_{}", std::process::id()));
        let written = save_png(buffer.clone(), &stem).unwrap();
        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));

        let decoded = image::open(&written).unwrap().to_rgba8();
        std::fs::remove_file(&written).unwrap();
        assert_eq!(decoded.dimensions(), (buffer.width(), buffer.height()));
        assert_eq!(decoded.into_raw(), buffer.into_raw());
    }
}
