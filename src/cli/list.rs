//! List command implementation.
//!
//! Enumerates flags and prints where each one lands in the sprite, without
//! rendering anything.

use std::io::{self, Write};

use clap::Args;

use crate::discovery::enumerate;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::{FlagSet, Scale};

use super::ConfigArgs;

/// List flags with their identifiers and offsets
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show 2x offsets instead of 1x
    #[arg(long)]
    pub hidpi: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.config.load()?;
    let flags = enumerate(&manifest)?;
    let scale = if args.hidpi { Scale::X2 } else { Scale::X1 };

    let mut stdout = io::stdout().lock();
    for line in format_listing(&flags, scale) {
        writeln!(stdout, "{}", line)?;
    }

    let (width, height) = flags.layout().dimensions(scale);
    printer.info(
        "Found",
        &format!(
            "{} in {} (sprite {}x{} at {})",
            plural(flags.len(), "flag", "flags"),
            display_path(&manifest.input),
            width,
            height,
            scale
        ),
    );

    Ok(())
}

/// One `identifier offset source` row per flag, columns aligned.
pub fn format_listing(flags: &FlagSet, scale: Scale) -> Vec<String> {
    let id_width = flags
        .iter()
        .map(|f| f.identifier.len())
        .max()
        .unwrap_or(0);

    flags
        .iter()
        .map(|f| {
            let source = f
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!(
                "{:<id_width$}  {:>7}  {}",
                f.identifier,
                format!("{}px", -i64::from(f.offset(scale))),
                source
            )
        })
        .collect()
}
