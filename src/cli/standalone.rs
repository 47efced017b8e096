use clap::Parser;
use std::path::PathBuf;

/// Arguments for the standalone command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the distribution in <project>/pkg:\n    distpack standalone\n\n\
                  Build it elsewhere:\n    distpack pkg --dest /opt/shop\n\n\
                  Package another project:\n    distpack -p ../shop standalone")]
pub struct StandaloneArgs {
    /// Distribution root; everything but logs/ is erased first (defaults to <project>/pkg)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dest: Option<PathBuf>,
}
