//! Rendering module for flagsprite.
//!
//! This module handles rasterizing flag SVGs, compositing them into sprite
//! sheets, and producing the metadata that describes those sheets.

mod encode;
mod raster;
mod scss;
mod sheet;
mod sprite;

pub use encode::{encode, SpriteFormat};
pub use raster::{RasterError, Rasterizer};
pub use scss::{MetadataDocument, FILE_WARNING};
pub use sheet::{write_sheet_json, Frame, SheetMeta};
pub use sprite::{compose, write_sprite, RasterBuffer};
