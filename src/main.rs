//! distpack - deployment packaging for JVM applications
//!
//! Assembles a built application jar and its resolved runtime dependencies
//! into a flat library directory or a self-contained distribution tree with
//! launcher scripts.

use clap::Parser;

mod builder;
mod bundle;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod installer;
mod progress;
mod resolver;
#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Default log filter; `RUST_LOG` takes precedence
fn log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Deps(args) => commands::deps::run(cli.project, cli.repository, args),
        Commands::Standalone(args) => commands::standalone::run(cli.project, cli.repository, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
