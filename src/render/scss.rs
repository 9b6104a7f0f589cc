//! SCSS metadata output.
//!
//! The generated partial declares the 1x sprite dimensions, the flag cell
//! size and a `$flags` map from identifier to the (negative) horizontal
//! background offset of that flag.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{FlagError, Result};
use crate::types::SpriteLayout;

/// Header and footer line of the generated file.
pub const FILE_WARNING: &str = "//* THIS FILE IS AUTO-GENERATED. DO NOT EDIT.";

/// Incrementally built `$flags` map, wrapped with the fixed declarations
/// once the sprite layout is final.
#[derive(Debug, Clone)]
pub struct MetadataDocument {
    flags: String,
    count: usize,
}

impl MetadataDocument {
    pub fn new() -> Self {
        Self {
            flags: String::from("$flags: (\n"),
            count: 0,
        }
    }

    /// Append a flag whose left edge sits `offset` pixels into the 1x sprite.
    pub fn push_flag(&mut self, identifier: &str, offset: u32) {
        let _ = writeln!(self.flags, "  {}: (", identifier);
        let _ = writeln!(self.flags, "    offset: {}px,", -i64::from(offset));
        self.flags.push_str("  ),\n");
        self.count += 1;
    }

    /// Number of flags appended so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Render the complete document.
    pub fn render(&self, layout: &SpriteLayout) -> String {
        let mut out = String::new();

        out.push_str(FILE_WARNING);
        out.push_str("\n\n");

        out.push_str("$flags-sprite-1x: (\n");
        let _ = writeln!(out, "  height: {}px,", layout.height());
        let _ = writeln!(out, "  width: {}px,", layout.width());
        out.push_str(");\n\n");

        let _ = writeln!(out, "$flag-width: {}px;\n", layout.cell.width);
        let _ = writeln!(out, "$flag-height: {}px;\n", layout.cell.height);

        out.push_str(&self.flags);
        out.push_str(");\n\n");

        out.push_str(FILE_WARNING);
        out.push('\n');
        out
    }

    /// Render and write the document, creating parent directories.
    pub fn write(&self, layout: &SpriteLayout, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| FlagError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        fs::write(path, self.render(layout)).map_err(|e| FlagError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write SCSS metadata: {}", e),
        })
    }
}

impl Default for MetadataDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellSize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_snapshot() {
        let mut doc = MetadataDocument::new();
        doc.push_flag("ac", 0);
        doc.push_flag("ad", 22);
        doc.push_flag("ae", 44);

        let layout = SpriteLayout::new(CellSize::default(), 3).unwrap();

        insta::assert_snapshot!(doc.render(&layout), @r###"
        //* THIS FILE IS AUTO-GENERATED. DO NOT EDIT.

        $flags-sprite-1x: (
          height: 15px,
          width: 64px,
        );

        $flag-width: 20px;

        $flag-height: 15px;

        $flags: (
          ac: (
            offset: 0px,
          ),
          ad: (
            offset: -22px,
          ),
          ae: (
            offset: -44px,
          ),
        );

        //* THIS FILE IS AUTO-GENERATED. DO NOT EDIT.
        "###);
    }

    #[test]
    fn test_single_flag_block() {
        let mut doc = MetadataDocument::new();
        doc.push_flag("gb", 66);

        let rendered = doc.render(&SpriteLayout::new(CellSize::default(), 4).unwrap());

        assert!(rendered.contains("  gb: (\n    offset: -66px,\n  ),\n"));
        assert!(rendered.contains("  width: 86px,\n"));
    }

    #[test]
    fn test_header_and_footer() {
        let doc = MetadataDocument::new();
        let rendered = doc.render(&SpriteLayout::new(CellSize::default(), 0).unwrap());

        assert!(rendered.starts_with(FILE_WARNING));
        assert!(rendered.ends_with(&format!("{}\n", FILE_WARNING)));
        assert!(rendered.contains("$flags: (\n);\n"));
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_custom_cell_size() {
        let mut doc = MetadataDocument::new();
        doc.push_flag("fr", 0);
        let layout = SpriteLayout::new(CellSize::new(16, 12, 1), 1).unwrap();

        let rendered = doc.render(&layout);

        assert!(rendered.contains("$flag-width: 16px;\n\n$flag-height: 12px;\n\n"));
        assert!(rendered.contains("  height: 12px,\n  width: 16px,\n"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src/css/_metadata.scss");

        let mut doc = MetadataDocument::new();
        doc.push_flag("ad", 0);
        let layout = SpriteLayout::new(CellSize::default(), 1).unwrap();
        doc.write(&layout, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), doc.render(&layout));
    }
}
