//! Validation system for flag sets.
//!
//! Runs a suite of checks against the configuration and the enumerated
//! flags and reports errors and warnings. Used by `flagsprite validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::discovery::Manifest;
use crate::output::Printer;
use crate::render::Rasterizer;
use crate::types::FlagSet;

/// Run all validation checks.
pub fn validate_flags(flags: &FlagSet, manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_cell_size(manifest));
    result.merge(checks::check_not_empty(flags, manifest));
    result.merge(checks::check_duplicate_identifiers(flags));
    result.merge(checks::check_unused_overrides(flags, manifest));
    result.merge(checks::check_svg_sources(flags, &Rasterizer::new()));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellSize;

    #[test]
    fn test_validate_empty_set() {
        let flags = FlagSet::place(Vec::<(String, String)>::new(), CellSize::default()).unwrap();
        let result = validate_flags(&flags, &Manifest::default());
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_valid_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sh-ac.svg");
        std::fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"/>"#,
        )
        .unwrap();

        let flags = FlagSet::place(vec![("ac", path)], CellSize::default()).unwrap();
        let result = validate_flags(&flags, &Manifest::default());

        assert!(result.is_ok());
    }
}
