//! Image encoding for sprite output.
//!
//! PNG is written with maximum compression and adaptive filtering; WebP is
//! always lossless.

use std::fmt;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult, RgbaImage};

/// Encoded sprite file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteFormat {
    Png,
    WebP,
}

impl SpriteFormat {
    /// Formats written per scale, in output order.
    pub const ALL: [SpriteFormat; 2] = [SpriteFormat::Png, SpriteFormat::WebP];
}

impl fmt::Display for SpriteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteFormat::Png => write!(f, "PNG"),
            SpriteFormat::WebP => write!(f, "WebP"),
        }
    }
}

/// Encode an RGBA image in the given format.
pub fn encode(image: &RgbaImage, format: SpriteFormat) -> ImageResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    match format {
        SpriteFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut bytes,
                CompressionType::Best,
                FilterType::Adaptive,
            );
            encoder.write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)?;
        }
        SpriteFormat::WebP => {
            let encoder = WebPEncoder::new_lossless(&mut bytes);
            encoder.encode(image.as_raw(), width, height, ExtendedColorType::Rgba8)?;
        }
    }

    Ok(bytes)
}
