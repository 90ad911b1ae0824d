use std::path::{Path, PathBuf};

use tile_noise::TextureConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod export;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Usage: `tile_export [CONFIG.ron|CONFIG.json] [OUTPUT]`
fn main() -> anyhow::Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1);
    let config = match args.next() {
        Some(path) => config::load_from_file(Path::new(&path))?,
        None => TextureConfig::default(),
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export::DEFAULT_OUTPUT));

    info!(
        "Generating {}x{} texture (period {}, {} octaves)",
        config.width, config.height, config.period, config.octaves
    );
    let buffer = tile_noise::build_texture(&config).map_err(error::ExportError::from)?;
    export::save_png(buffer, &output)?;
    Ok(())
}
