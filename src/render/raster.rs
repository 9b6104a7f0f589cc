//! SVG rasterization.
//!
//! Renders a flag SVG into a straight-alpha RGBA bitmap of an exact size.
//! The SVG is stretched independently on each axis, so the aspect ratio of
//! the source is not preserved.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use thiserror::Error;

use crate::error::{FlagError, Result};

/// Failure to turn SVG bytes into pixels.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Allocate { width: u32, height: u32 },
}

/// SVG renderer with shared parsing options.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            options: usvg::Options::default(),
        }
    }

    /// Render SVG bytes to exactly `width` x `height` pixels.
    pub fn render(
        &self,
        svg: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<RgbaImage, RasterError> {
        let tree = usvg::Tree::from_data(svg, &self.options)?;

        let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Allocate { width, height })?;

        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(to_rgba_image(&pixmap))
    }

    /// Check that an SVG file parses, without rendering it.
    pub fn check_file(&self, path: &Path) -> Result<()> {
        let svg = fs::read(path).map_err(|e| FlagError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read SVG: {}", e),
        })?;

        usvg::Tree::from_data(&svg, &self.options)
            .map(|_| ())
            .map_err(|e| FlagError::Render {
                path: path.to_path_buf(),
                message: RasterError::from(e).to_string(),
            })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a premultiplied pixmap into a straight-alpha image.
fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}
