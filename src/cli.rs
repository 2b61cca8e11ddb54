//! Command-line arguments for the cmdparse inspector.

use clap::Parser;
use cmdparse::{DEFAULT_SEPARATOR, Separator};

/// Shows how lines break into command, subcommand and arguments.
#[derive(Parser, Debug)]
#[command(name = "cmdparse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Line to parse once; without it an interactive prompt starts
    #[arg(value_name = "LINE")]
    pub line: Option<String>,

    /// Argument separator (must not be empty)
    #[arg(
        short,
        long,
        value_name = "SEP",
        env = "CMDPARSE_SEPARATOR",
        default_value = DEFAULT_SEPARATOR
    )]
    pub separator: Separator,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
