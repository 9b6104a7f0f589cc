pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::discovery::{discover, discover_manifest, Manifest, MANIFEST_FILENAME};
use crate::error::Result;

/// flagsprite - Flag sprite sheet and SCSS metadata generator
#[derive(Parser, Debug)]
#[command(name = "flagsprite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sprite sheets and SCSS metadata
    Build(build::BuildArgs),

    /// List flags with their identifiers and offsets
    List(list::ListArgs),

    /// Check flags and configuration without writing output
    Validate(validate::ValidateArgs),

    /// Write a default flagsprite.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Manifest selection shared by every command that reads flags.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Manifest file (default: ./flagsprite.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory of source SVG flags
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the manifest and apply command line overrides.
    pub fn load(&self) -> Result<Manifest> {
        let discovery = match &self.config {
            Some(path) => discover_manifest(path)?,
            None => discover(".")?,
        };

        if discovery.has_manifest {
            tracing::debug!("using manifest in {}", discovery.root.display());
        } else {
            tracing::debug!(
                "no {} in {}, using defaults",
                MANIFEST_FILENAME,
                discovery.root.display()
            );
        }

        let mut manifest = discovery.manifest;
        if let Some(input) = &self.input {
            manifest.input = input.clone();
        }
        Ok(manifest)
    }
}
