use std::path::Path;

use serde::de::DeserializeOwned;
use tile_noise::TextureConfig;
use tracing::debug;

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

fn parse<T: DeserializeOwned>(text: &str, format: ConfigFormat) -> Result<T, ExportError> {
    Ok(match format {
        ConfigFormat::Ron => ron::from_str(text)?,
        ConfigFormat::Json => serde_json::from_str(text)?,
    })
}

/// Parses a texture config; fields left out keep their defaults.
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<TextureConfig, ExportError> {
    parse(text, format)
}

pub fn load_from_file(path: &Path) -> Result<TextureConfig, ExportError> {
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text, format)?;
    debug!(path = %path.display(), ?config, "loaded texture config");
    Ok(config)
}
