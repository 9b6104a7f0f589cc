//! flagsprite - Flag sprite sheet generator
//!
//! Rasterizes a directory of SVG flags into horizontal sprite sheets (PNG
//! and lossless WebP, at 1x and 2x) and writes an SCSS partial with the
//! offset of every flag.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, enumerate, DiscoveryResult, IdentifierResolver, Manifest};
pub use error::{FlagError, Result};
pub use pipeline::{generate, BuildReport};
pub use render::{
    compose, encode, write_sheet_json, write_sprite, MetadataDocument, RasterBuffer, Rasterizer,
    SheetMeta, SpriteFormat,
};
pub use types::{CellSize, FlagEntry, FlagSet, Scale, SpriteLayout};
pub use validation::{validate_flags, Diagnostic, Severity, ValidationResult};
