//! Project manifest (flagsprite.yaml) parsing.
//!
//! The manifest overrides the build constants: source directory, output
//! paths, cell geometry and the identifier override table. Every field is
//! optional and defaults to the values the stylesheet expects.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, Result};
use crate::render::SpriteFormat;
use crate::types::{CellSize, Scale, SpriteLayout};

/// Project manifest loaded from flagsprite.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory containing the source SVG flags.
    pub input: PathBuf,

    /// Generated SCSS metadata file.
    pub scss: PathBuf,

    /// Sprite sheet output paths.
    pub sprites: SpritePaths,

    /// Optional JSON frame sidecar for the 1x sprite.
    pub json: Option<PathBuf>,

    /// Flag cell width at 1x, in pixels.
    pub flag_width: u32,

    /// Flag cell height at 1x, in pixels.
    pub flag_height: u32,

    /// Horizontal gap between flags at 1x, in pixels.
    pub margin: u32,

    /// Filename to identifier overrides, consulted before the stem rule.
    pub overrides: BTreeMap<String, String>,

    /// Filename patterns skipped during enumeration.
    pub excludes: Vec<String>,
}

/// Output paths for the four sprite sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    pub png_1x: PathBuf,
    pub png_2x: PathBuf,
    pub webp_1x: PathBuf,
    pub webp_2x: PathBuf,
}

impl SpritePaths {
    /// Path of the sprite for a scale and format.
    pub fn path(&self, scale: Scale, format: SpriteFormat) -> &Path {
        match (scale, format) {
            (Scale::X1, SpriteFormat::Png) => &self.png_1x,
            (Scale::X2, SpriteFormat::Png) => &self.png_2x,
            (Scale::X1, SpriteFormat::WebP) => &self.webp_1x,
            (Scale::X2, SpriteFormat::WebP) => &self.webp_2x,
        }
    }

    /// Move every sprite into `dir`, keeping the file names.
    pub fn relocate(&mut self, dir: &Path) {
        for path in [
            &mut self.png_1x,
            &mut self.png_2x,
            &mut self.webp_1x,
            &mut self.webp_2x,
        ] {
            if let Some(name) = path.file_name() {
                *path = dir.join(name);
            }
        }
    }
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            png_1x: PathBuf::from("build/img/flags.png"),
            png_2x: PathBuf::from("build/img/flags@2x.png"),
            webp_1x: PathBuf::from("build/img/flags.webp"),
            webp_2x: PathBuf::from("build/img/flags@2x.webp"),
        }
    }
}

/// Identifier overrides applied when the manifest does not set its own.
pub fn default_overrides() -> BTreeMap<String, String> {
    BTreeMap::from([("sh-ac.svg".to_string(), "ac".to_string())])
}

impl Default for Manifest {
    fn default() -> Self {
        let cell = CellSize::default();
        Self {
            input: PathBuf::from("node_modules/flag-icons/flags/4x3"),
            scss: PathBuf::from("src/css/_metadata.scss"),
            sprites: SpritePaths::default(),
            json: None,
            flag_width: cell.width,
            flag_height: cell.height,
            margin: cell.margin,
            overrides: default_overrides(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a flagsprite.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FlagError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| FlagError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check flagsprite.yaml syntax".to_string()),
        })
    }

    /// Resolve relative paths against `base` (normally the manifest's directory).
    pub fn with_base(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        resolve(&mut self.input);
        resolve(&mut self.scss);
        resolve(&mut self.sprites.png_1x);
        resolve(&mut self.sprites.png_2x);
        resolve(&mut self.sprites.webp_1x);
        resolve(&mut self.sprites.webp_2x);
        if let Some(json) = self.json.as_mut() {
            resolve(json);
        }

        self
    }

    /// Reject geometry that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.flag_width == 0 || self.flag_height == 0 {
            return Err(FlagError::Validation {
                message: format!(
                    "flag cell must be at least 1x1 pixels, got {}x{}",
                    self.flag_width, self.flag_height
                ),
                help: Some("Set flag_width and flag_height to positive values".to_string()),
            });
        }

        if SpriteLayout::new(self.cell(), 1).is_none() {
            return Err(FlagError::Validation {
                message: format!(
                    "flag cell of {}x{} pixels with a {} pixel margin is too large",
                    self.flag_width, self.flag_height, self.margin
                ),
                help: Some("Reduce flag_width, flag_height or margin in flagsprite.yaml".to_string()),
            });
        }
        Ok(())
    }

    /// Cell geometry at 1x.
    pub fn cell(&self) -> CellSize {
        CellSize::new(self.flag_width, self.flag_height, self.margin)
    }

    /// Check if a file name should be excluded based on exclude patterns.
    pub fn is_excluded(&self, filename: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(filename, pattern))
    }

    /// Simple glob pattern matching on file names.
    fn matches_pattern(filename: &str, pattern: &str) -> bool {
        match (pattern.strip_prefix('*'), pattern.strip_suffix('*')) {
            // *foo* matches anywhere
            (Some(_), Some(_)) if pattern.len() >= 2 => {
                filename.contains(&pattern[1..pattern.len() - 1])
            }
            (Some(suffix), _) => filename.ends_with(suffix),
            (_, Some(prefix)) => filename.starts_with(prefix),
            _ => filename == pattern,
        }
    }
}
