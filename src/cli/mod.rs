//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - deps: Dependency packaging arguments
//! - standalone: Standalone distribution arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod deps;
pub mod standalone;

pub use completions::CompletionsArgs;
pub use deps::DepsArgs;
pub use standalone::StandaloneArgs;

/// distpack - deployment packaging for JVM applications
#[derive(Parser, Debug)]
#[command(
    name = "distpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package JVM applications into runnable distributions",
    long_about = "distpack turns a built application jar and its resolved runtime dependencies \
                  into either a flat library directory or a standalone distribution tree with \
                  launcher scripts, configuration and a logs directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  distpack deps                       \x1b[90m# Copy runtime jars into ./lib\x1b[0m\n   \
                  distpack standalone                 \x1b[90m# Build the distribution in ./pkg\x1b[0m\n   \
                  distpack pkg --dest /opt/shop       \x1b[90m# Build it somewhere else\x1b[0m\n   \
                  distpack -p ../shop -v standalone   \x1b[90m# Another project, verbose\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root containing distpack.yaml (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "DISTPACK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Local artifact repository (defaults to ~/.m2/repository)
    #[arg(long, global = true, env = "DISTPACK_REPOSITORY", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the application jar and its runtime dependencies into a directory
    Deps(DepsArgs),

    /// Build a standalone distribution with launchers
    #[command(visible_alias = "pkg")]
    Standalone(StandaloneArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
