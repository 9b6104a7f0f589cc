//! Build command implementation.
//!
//! Generates the four sprite sheets and the SCSS metadata file.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::pipeline::{generate, BuildReport};

use super::ConfigArgs;

/// Generate sprite sheets and SCSS metadata
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory for the sprite images (file names are kept)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Path of the generated SCSS file
    #[arg(long)]
    pub scss: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<BuildReport> {
    let mut manifest = args.config.load()?;

    if let Some(dir) = &args.output_dir {
        manifest.sprites.relocate(dir);
    }
    if let Some(scss) = args.scss {
        manifest.scss = scss;
    }

    generate(&manifest, printer)
}
