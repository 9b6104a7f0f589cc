//! Sprite sheet composition.
//!
//! Places rasterized flags on a transparent canvas and writes the result
//! in each output format.

use std::fs;
use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::{FlagError, Result};

use super::encode::{encode, SpriteFormat};

/// A rasterized flag and where it goes in its sprite.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    pub image: RgbaImage,
    /// Left edge in the sprite, in pixels of the sprite's own scale.
    pub offset: u32,
}

impl RasterBuffer {
    pub fn new(image: RgbaImage, offset: u32) -> Self {
        Self { image, offset }
    }
}

/// Composite every buffer at `(offset, 0)` on a transparent canvas.
///
/// Buffers extending past the canvas are clipped.
pub fn compose(buffers: &[RasterBuffer], width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for buffer in buffers {
        imageops::replace(&mut canvas, &buffer.image, buffer.offset as i64, 0);
    }
    canvas
}

/// Compose, encode and write one sprite sheet.
pub fn write_sprite(
    buffers: &[RasterBuffer],
    width: u32,
    height: u32,
    path: &Path,
    format: SpriteFormat,
) -> Result<()> {
    let canvas = compose(buffers, width, height);

    let bytes = encode(&canvas, format).map_err(|e| FlagError::Build {
        message: format!("Failed to encode {} sprite {}: {}", format, path.display(), e),
        help: None,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| FlagError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, bytes).map_err(|e| FlagError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write {} sprite: {}", format, e),
    })?;

    tracing::debug!("wrote {} sprite {:?} ({}x{})", format, path, width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn solid(w: u32, h: u32, colour: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, colour)
    }

    #[test]
    fn test_compose_places_buffers_side_by_side() {
        let buffers = vec![
            RasterBuffer::new(solid(2, 2, RED), 0),
            RasterBuffer::new(solid(2, 2, BLUE), 3),
        ];

        let canvas = compose(&buffers, 5, 2);

        assert_eq!(canvas.dimensions(), (5, 2));
        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(1, 1), RED);
        // Margin column stays transparent
        assert_eq!(canvas.get_pixel(2, 0).0, [0, 0, 0, 0]);
        assert_eq!(*canvas.get_pixel(3, 0), BLUE);
        assert_eq!(*canvas.get_pixel(4, 1), BLUE);
    }

    #[test]
    fn test_compose_clips_overflow() {
        let buffers = vec![RasterBuffer::new(solid(4, 4, RED), 2)];
        let canvas = compose(&buffers, 3, 2);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert_eq!(*canvas.get_pixel(2, 1), RED);
    }

    #[test]
    fn test_compose_empty_canvas_is_transparent() {
        let canvas = compose(&[], 3, 3);
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_write_sprite_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build/img/flags.png");
        let buffers = vec![RasterBuffer::new(solid(2, 1, RED), 0)];

        write_sprite(&buffers, 2, 1, &path, SpriteFormat::Png).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(*img.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_write_sprite_webp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.webp");
        let buffers = vec![RasterBuffer::new(solid(2, 2, BLUE), 0)];

        write_sprite(&buffers, 4, 2, &path, SpriteFormat::WebP).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(*img.get_pixel(0, 0), BLUE);
        assert_eq!(img.get_pixel(3, 1).0[3], 0);
    }
}
