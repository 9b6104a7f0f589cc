//! Validation checks for an enumerated flag set.
//!
//! Each check returns a `ValidationResult`; none of them write output.

use crate::discovery::Manifest;
use crate::render::Rasterizer;
use crate::types::FlagSet;

use super::warning::{Diagnostic, ValidationResult};

/// The input directory must contain at least one flag.
pub fn check_not_empty(flags: &FlagSet, manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if flags.is_empty() {
        result.push(
            Diagnostic::error(
                "flagsprite::validate::no-flags",
                format!("No SVG files found in {}", manifest.input.display()),
            )
            .with_help("Point `input` in flagsprite.yaml at a directory of flag SVGs"),
        );
    }

    result
}

/// Every identifier must be produced by exactly one file.
pub fn check_duplicate_identifiers(flags: &FlagSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for collision in flags.collisions() {
        result.push(
            Diagnostic::error(
                "flagsprite::validate::duplicate-identifier",
                format!(
                    "Identifier '{}' is produced by both {} and {}",
                    collision.identifier,
                    collision.first.display(),
                    collision.second.display()
                ),
            )
            .with_help("Add an entry to `overrides` to rename one of them"),
        );
    }

    result
}

/// Cell geometry must be renderable; a zero margin is allowed but unusual.
pub fn check_cell_size(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if manifest.flag_width == 0 || manifest.flag_height == 0 {
        result.push(
            Diagnostic::error(
                "flagsprite::validate::empty-cell",
                format!(
                    "Flag cell {}x{} has no pixels",
                    manifest.flag_width, manifest.flag_height
                ),
            )
            .with_help("Set flag_width and flag_height to positive values"),
        );
    }

    if manifest.margin == 0 {
        result.push(
            Diagnostic::warning(
                "flagsprite::validate::no-margin",
                "Margin is 0, adjacent flags will bleed when scaled by the browser",
            )
            .with_help("A margin of 2 pixels is the default"),
        );
    }

    result
}

/// Overrides naming files that are not in the input directory.
pub fn check_unused_overrides(flags: &FlagSet, manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    for filename in manifest.overrides.keys() {
        let used = flags.iter().any(|f| {
            f.source_path
                .file_name()
                .is_some_and(|n| n.to_string_lossy() == filename.as_str())
        });
        if !used {
            result.push(Diagnostic::warning(
                "flagsprite::validate::unused-override",
                format!("Override for '{}' matches no source file", filename),
            ));
        }
    }

    result
}

/// Every source file must parse as SVG.
pub fn check_svg_sources(flags: &FlagSet, rasterizer: &Rasterizer) -> ValidationResult {
    let mut result = ValidationResult::new();

    for flag in flags.iter() {
        if let Err(e) = rasterizer.check_file(&flag.source_path) {
            result.push(Diagnostic::error(
                "flagsprite::validate::invalid-svg",
                e.to_string(),
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellSize;
    use std::path::PathBuf;

    fn set(entries: Vec<(&str, &str)>) -> FlagSet {
        FlagSet::place(entries, CellSize::default()).unwrap()
    }

    #[test]
    fn test_not_empty() {
        let manifest = Manifest::default();
        assert!(check_not_empty(&set(vec![]), &manifest).has_errors());
        assert!(check_not_empty(&set(vec![("gb", "gb.svg")]), &manifest).is_ok());
    }

    #[test]
    fn test_duplicate_identifiers() {
        let flags = set(vec![("ac", "ac.svg"), ("ac", "sh-ac.svg"), ("gb", "gb.svg")]);
        let result = check_duplicate_identifiers(&flags);

        assert_eq!(result.error_count(), 1);
        let d = result.iter().next().unwrap();
        assert_eq!(d.code, "flagsprite::validate::duplicate-identifier");
        assert!(d.message.contains("sh-ac.svg"));
    }

    #[test]
    fn test_cell_size() {
        let manifest = Manifest {
            flag_width: 0,
            margin: 0,
            ..Default::default()
        };
        let result = check_cell_size(&manifest);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);

        assert!(check_cell_size(&Manifest::default()).is_ok());
    }

    #[test]
    fn test_unused_overrides() {
        let manifest = Manifest::default();

        let with_file = set(vec![("ac", "flags/sh-ac.svg")]);
        assert!(check_unused_overrides(&with_file, &manifest).is_ok());

        let without = set(vec![("gb", "flags/gb.svg")]);
        let result = check_unused_overrides(&without, &manifest);
        assert_eq!(result.warning_count(), 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_svg_sources() {
        let dir = tempfile::tempdir().unwrap();
        let good: PathBuf = dir.path().join("gb.svg");
        let bad: PathBuf = dir.path().join("xx.svg");
        std::fs::write(
            &good,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"/>"#,
        )
        .unwrap();
        std::fs::write(&bad, "garbage").unwrap();

        let flags = FlagSet::place(
            vec![("gb", good), ("xx", bad)],
            CellSize::default(),
        )
        .unwrap();
        let result = check_svg_sources(&flags, &Rasterizer::new());

        assert_eq!(result.error_count(), 1);
    }
}
