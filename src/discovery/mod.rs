//! Manifest lookup and flag enumeration.
//!
//! Looks for a `flagsprite.yaml` manifest, falls back to the built-in
//! constants when there is none, and turns the input directory into an
//! ordered [`FlagSet`].
//!
//! # Example
//!
//! ```ignore
//! use flagsprite::discovery::{discover, enumerate};
//!
//! let result = discover(".")?;
//! let flags = enumerate(&result.manifest)?;
//! println!("Found {} flags", flags.len());
//! ```

mod identifier;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::FlagSet;

pub use identifier::IdentifierResolver;
pub use manifest::{default_overrides, Manifest, SpritePaths};
pub use scanner::{is_flag_file, scan_directory, SVG_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "flagsprite.yaml";

/// Result of looking up a project's configuration.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// Directory relative paths are resolved against.
    pub root: PathBuf,

    /// The loaded manifest, with paths already resolved against `root`.
    pub manifest: Manifest,

    /// Whether a manifest file was found.
    pub has_manifest: bool,
}

/// Discover the configuration of a project directory.
///
/// Uses `<root>/flagsprite.yaml` when present, otherwise the defaults.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let manifest_path = root.join(MANIFEST_FILENAME);

    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(DiscoveryResult {
        manifest: manifest.with_base(&root),
        root,
        has_manifest,
    })
}

/// Load an explicit manifest file; paths resolve against its directory.
pub fn discover_manifest(path: &Path) -> Result<DiscoveryResult> {
    let root = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let manifest = Manifest::load(path)?.with_base(&root);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: true,
    })
}

/// Scan `manifest.input` and assign identifiers and offsets.
///
/// The manifest geometry is validated first.
pub fn enumerate(manifest: &Manifest) -> Result<FlagSet> {
    manifest.validate()?;

    let files = scan_directory(&manifest.input, manifest)?;
    let resolver = IdentifierResolver::new(manifest.overrides.clone());

    let flags = files.into_iter().map(|path| {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (resolver.resolve(&filename), path)
    });

    FlagSet::place(flags, manifest.cell())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlagError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.manifest.input, dir.path().join("node_modules/flag-icons/flags/4x3"));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "input: flags\nmargin: 0\n").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.input, dir.path().join("flags"));
        assert_eq!(result.manifest.margin, 0);
    }

    #[test]
    fn test_discover_explicit_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "scss: out/_flags.scss\n").unwrap();

        let result = discover_manifest(&path).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.scss, dir.path().join("out/_flags.scss"));
    }

    #[test]
    fn test_enumerate_places_flags_in_name_order() {
        let dir = tempdir().unwrap();
        let flags_dir = dir.path().join("flags");
        fs::create_dir_all(&flags_dir).unwrap();
        for name in ["gb.svg", "AD.svg", "sh-ac.svg", "fr.svg"] {
            fs::write(flags_dir.join(name), "<svg/>").unwrap();
        }

        let manifest = Manifest {
            input: flags_dir,
            ..Default::default()
        };
        let flags = enumerate(&manifest).unwrap();

        let ids: Vec<&str> = flags.iter().map(|f| f.identifier.as_str()).collect();
        // Uppercase sorts first; identifiers are lowercased afterwards
        assert_eq!(ids, vec!["ad", "fr", "gb", "ac"]);

        let offsets: Vec<u32> = flags.iter().map(|f| f.offset_1x).collect();
        assert_eq!(offsets, vec![0, 22, 44, 66]);
    }

    #[test]
    fn test_enumerate_rejects_oversized_cells() {
        let dir = tempdir().unwrap();
        let flags_dir = dir.path().join("flags");
        fs::create_dir_all(&flags_dir).unwrap();
        for name in ["ad.svg", "ae.svg"] {
            fs::write(flags_dir.join(name), "<svg/>").unwrap();
        }
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "input: flags\nflag_width: 4294967295\n",
        )
        .unwrap();

        let result = discover(dir.path()).unwrap();
        let err = enumerate(&result.manifest).unwrap_err();

        assert!(matches!(err, FlagError::Validation { .. }));
    }

    #[test]
    fn test_enumerate_rejects_strip_too_wide_at_double_density() {
        let dir = tempdir().unwrap();
        for name in ["ad.svg", "ae.svg", "af.svg"] {
            fs::write(dir.path().join(name), "<svg/>").unwrap();
        }

        // One cell fits at 2x, three do not
        let manifest = Manifest {
            input: dir.path().to_path_buf(),
            flag_width: u32::MAX / 4,
            margin: 0,
            ..Default::default()
        };
        assert!(manifest.validate().is_ok());
        assert!(matches!(
            enumerate(&manifest),
            Err(FlagError::Validation { .. })
        ));
    }
}
