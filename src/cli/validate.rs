//! Validate command implementation.

use clap::Args;

use crate::discovery::enumerate;
use crate::error::{FlagError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_flags, ValidationResult};

use super::ConfigArgs;

/// Check flags and configuration without writing output
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    let manifest = args.config.load()?;
    let flags = enumerate(&manifest)?;

    printer.status("Checking", &plural(flags.len(), "flag", "flags"));
    let result = validate_flags(&flags, &manifest);
    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
        return Err(FlagError::Validation {
            message: format!("{} found", plural(errors + warnings, "problem", "problems")),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Passed", &plural(warnings, "warning", "warnings"));
    } else {
        printer.success("Passed", "no problems found");
    }

    Ok(result)
}
