//! Seamless, tileable gradient-noise textures.
//!
//! A hashed gradient lattice wrapped to a fixed period feeds a smoothstep
//! interpolated noise field, which is layered as fractal Brownian motion and
//! rasterised into an RGBA buffer. The buffer tiles without visible seams.

pub mod api;
pub mod fbm;
pub mod gradient;
pub mod image_buffer;
pub mod interpolate;
pub mod lattice;

pub use api::*;
pub use fbm::{fbm, Fbm, CONTRAST_GAIN};
pub use gradient::{gradient, Gradient};
pub use image_buffer::{build, build_texture, intensity, TextureBuilder};
pub use interpolate::{smoothstep_blend, TileablePerlin};
pub use lattice::{corner_contribution, Cell, Corners};
