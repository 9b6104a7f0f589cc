//! Flag entries and the ordered set that makes up one sprite strip.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{FlagError, Result};

use super::layout::{CellSize, Scale, SpriteLayout};

/// A single flag placed in the sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    /// Stylesheet identifier, e.g. `gb` or `ac`.
    pub identifier: String,
    /// SVG file the flag is rendered from.
    pub source_path: PathBuf,
    /// Left edge of the flag in the 1x sprite.
    pub offset_1x: u32,
    /// Left edge of the flag in the 2x sprite.
    pub offset_2x: u32,
}

impl FlagEntry {
    pub fn new(identifier: impl Into<String>, source_path: impl Into<PathBuf>, offset_1x: u32) -> Self {
        Self {
            identifier: identifier.into(),
            source_path: source_path.into(),
            offset_1x,
            offset_2x: offset_1x * Scale::X2.factor(),
        }
    }

    /// Left edge of the flag at the given scale.
    pub fn offset(&self, scale: Scale) -> u32 {
        match scale {
            Scale::X1 => self.offset_1x,
            Scale::X2 => self.offset_2x,
        }
    }
}

/// Two source files that resolved to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCollision {
    pub identifier: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Flags in sprite order, together with the layout they were placed with.
#[derive(Debug, Clone)]
pub struct FlagSet {
    entries: Vec<FlagEntry>,
    layout: SpriteLayout,
}

impl FlagSet {
    /// Place `(identifier, source)` pairs left-to-right in the given order.
    ///
    /// Fails when the strip would be too wide to address in pixels.
    pub fn place<I, S, P>(flags: I, cell: CellSize) -> Result<Self>
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let flags: Vec<(S, P)> = flags.into_iter().collect();

        let layout = SpriteLayout::new(cell, flags.len()).ok_or_else(|| FlagError::Validation {
            message: format!(
                "{} flags of {}x{} pixels with a {} pixel margin do not fit in a sprite",
                flags.len(),
                cell.width,
                cell.height,
                cell.margin
            ),
            help: Some("Reduce flag_width, flag_height or margin in flagsprite.yaml".to_string()),
        })?;

        let entries = flags
            .into_iter()
            .enumerate()
            .map(|(i, (identifier, source))| {
                FlagEntry::new(identifier, source, layout.offset_of(i))
            })
            .collect();

        Ok(Self { entries, layout })
    }

    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    pub fn layout(&self) -> SpriteLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlagEntry> {
        self.entries.iter()
    }

    /// Every identifier claimed by more than one source file.
    pub fn collisions(&self) -> Vec<IdentifierCollision> {
        let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();
        let mut collisions = Vec::new();

        for entry in &self.entries {
            if let Some(first) = seen.get(entry.identifier.as_str()) {
                collisions.push(IdentifierCollision {
                    identifier: entry.identifier.clone(),
                    first: first.to_path_buf(),
                    second: entry.source_path.clone(),
                });
            } else {
                seen.insert(&entry.identifier, &entry.source_path);
            }
        }

        collisions
    }

    /// Fail on the first identifier collision.
    pub fn ensure_unique(&self) -> Result<()> {
        match self.collisions().into_iter().next() {
            None => Ok(()),
            Some(c) => Err(FlagError::Validation {
                message: format!(
                    "identifier '{}' is produced by both {} and {}",
                    c.identifier,
                    c.first.display(),
                    c.second.display()
                ),
                help: Some("Add an entry to `overrides` in flagsprite.yaml to rename one of them".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlagSet {
        FlagSet::place(
            vec![("ad", "flags/ad.svg"), ("ae", "flags/ae.svg"), ("af", "flags/af.svg")],
            CellSize::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_entry_double_offset() {
        let entry = FlagEntry::new("gb", "gb.svg", 44);
        assert_eq!(entry.offset(Scale::X1), 44);
        assert_eq!(entry.offset(Scale::X2), 88);
    }

    #[test]
    fn test_place_assigns_running_offsets() {
        let set = sample();
        let offsets: Vec<u32> = set.iter().map(|e| e.offset_1x).collect();
        assert_eq!(offsets, vec![0, 22, 44]);
        assert_eq!(set.layout().width(), 64);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_place_doubles_offsets() {
        let set = sample();
        let offsets: Vec<u32> = set.iter().map(|e| e.offset(Scale::X2)).collect();
        assert_eq!(offsets, vec![0, 44, 88]);
    }

    #[test]
    fn test_unique_set_has_no_collisions() {
        let set = sample();
        assert!(set.collisions().is_empty());
        assert!(set.ensure_unique().is_ok());
    }

    #[test]
    fn test_collision_detected() {
        let set = FlagSet::place(
            vec![("ac", "flags/ac.svg"), ("ac", "flags/sh-ac.svg")],
            CellSize::default(),
        )
        .unwrap();

        let collisions = set.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].identifier, "ac");
        assert_eq!(collisions[0].first, PathBuf::from("flags/ac.svg"));
        assert_eq!(collisions[0].second, PathBuf::from("flags/sh-ac.svg"));

        let err = set.ensure_unique().unwrap_err();
        assert!(err.to_string().contains("'ac'"));
    }

    #[test]
    fn test_empty_set() {
        let set = FlagSet::place(Vec::<(String, PathBuf)>::new(), CellSize::default()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.layout().width(), 0);
    }

    #[test]
    fn test_place_rejects_oversized_cells() {
        let err = FlagSet::place(
            vec![("ad", "ad.svg"), ("ae", "ae.svg")],
            CellSize::new(u32::MAX, 15, 2),
        )
        .unwrap_err();
        assert!(matches!(err, FlagError::Validation { .. }));
    }
}
