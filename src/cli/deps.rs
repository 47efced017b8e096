use clap::Parser;
use std::path::PathBuf;

/// Arguments for the deps command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy runtime jars into <project>/lib:\n    distpack deps\n\n\
                  Copy them somewhere else:\n    distpack deps --target build/jars")]
pub struct DepsArgs {
    /// Target directory, erased before packaging (defaults to <project>/lib)
    #[arg(long, short = 't', value_name = "DIR")]
    pub target: Option<PathBuf>,
}
