//! Command-line surface: `docserve <document_root> <port> [<log_path> <max_concurrent>]`

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::CliArgs;

pub const USAGE: &str = "Usage: docserve <document_root> <port> [<log_path> <max_concurrent>]";

#[derive(Debug, Parser)]
#[command(name = "docserve", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Directory the served paths are resolved under
    document_root: PathBuf,
    /// Port to listen on
    port: u16,
    /// File the activity log is appended to
    #[arg(requires = "max_concurrent")]
    log_path: Option<PathBuf>,
    /// Maximum number of simultaneous sessions
    max_concurrent: Option<usize>,
}

impl From<Cli> for CliArgs {
    fn from(cli: Cli) -> Self {
        Self {
            document_root: cli.document_root,
            port: cli.port,
            log_path: cli.log_path,
            max_concurrent: cli.max_concurrent,
        }
    }
}

/// Parse a full argument list, program name first.
///
/// There are no flags: anything that is not the positional form is an error,
/// and the caller answers it with [`USAGE`].
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(CliArgs::from)
}
