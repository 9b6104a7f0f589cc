//! Filename to stylesheet identifier mapping.

use std::collections::BTreeMap;
use std::path::Path;

/// Derives flag identifiers from SVG file names.
///
/// The override table is matched on the exact file name and wins over the
/// default rule (strip the extension, lowercase the stem).
#[derive(Debug, Clone, Default)]
pub struct IdentifierResolver {
    overrides: BTreeMap<String, String>,
}

impl IdentifierResolver {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn resolve(&self, filename: &str) -> String {
        if let Some(identifier) = self.overrides.get(filename) {
            return identifier.clone();
        }

        Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename)
            .to_lowercase()
    }
}
