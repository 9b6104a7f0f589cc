use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use flagsprite::cli::{Cli, Commands};
use flagsprite::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => {
            flagsprite::cli::build::run(args, &printer)?;
        }
        Commands::List(args) => flagsprite::cli::list::run(args, &printer)?,
        Commands::Validate(args) => {
            flagsprite::cli::validate::run(args, &printer)?;
        }
        Commands::Init(args) => flagsprite::cli::init::run(args, &printer)?,
        Commands::Completions(args) => flagsprite::cli::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flagsprite={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
