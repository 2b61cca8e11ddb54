use crate::args::{self, ArgKind, ArgumentList};
use crate::error::Result;
use crate::splitter::{Separator, split_on};
use std::fmt;
use tracing::trace;

/// A line broken into command, subcommand and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    command: String,
    sub_command: Option<String>,
    args: Option<ArgumentList>,
}

impl ParseResult {
    /// First space-delimited token. Empty for an empty line.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Second space-delimited token, if the line has one.
    pub fn sub_command(&self) -> Option<&str> {
        self.sub_command.as_deref()
    }

    /// Arguments, present only when text follows the subcommand.
    pub fn args(&self) -> Option<&ArgumentList> {
        self.args.as_ref()
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "command: {:?}", self.command)?;
        match &self.sub_command {
            Some(sub) => writeln!(f, "subcommand: {:?}", sub)?,
            None => writeln!(f, "subcommand: -")?,
        }
        match &self.args {
            Some(args) => {
                writeln!(f, "args: {}", args.len())?;
                for (i, arg) in args.iter().enumerate() {
                    writeln!(f, "  [{}] raw: {:?}  value: {:?}", i, arg.raw(), arg.value())?;
                }
                write!(f, "values: {:?}", args.only(ArgKind::Value))
            }
            None => write!(f, "args: -"),
        }
    }
}

/// Parses a line using the default `,` separator.
///
/// # Example
/// ```
/// let result = cmdparse::parse("echo sub a,b,c");
/// assert_eq!(result.command(), "echo");
/// assert_eq!(result.sub_command(), Some("sub"));
/// ```
pub fn parse(line: &str) -> ParseResult {
    parse_on(line, &Separator::default())
}

/// Parses a line with a caller-supplied separator.
///
/// The separator is checked before anything else, so an empty one is reported
/// even when the line has no arguments.
pub fn parse_with(line: &str, separator: &str) -> Result<ParseResult> {
    let separator = Separator::new(separator)?;
    Ok(parse_on(line, &separator))
}

/// Parses a line with an already validated separator.
///
/// Only spaces are structural. Runs of spaces between the command, the
/// subcommand and the argument region are absorbed; everything from the start
/// of the argument region on is taken verbatim from `line`.
pub fn parse_on(line: &str, separator: &Separator) -> ParseResult {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, Some(rest.trim_start_matches(' '))),
        None => (line, None),
    };

    let mut result = ParseResult {
        command: command.to_string(),
        sub_command: None,
        args: None,
    };

    let Some(rest) = rest.filter(|r| !r.is_empty()) else {
        trace!(command = %result.command, "parsed command without subcommand");
        return result;
    };

    let region = match rest.split_once(' ') {
        Some((sub, region)) => {
            result.sub_command = Some(sub.to_string());
            Some(region.trim_start_matches(' '))
        }
        None => {
            result.sub_command = Some(rest.to_string());
            None
        }
    };

    if let Some(region) = region {
        result.args = Some(args::build(split_on(region, separator)));
    }

    trace!(
        command = %result.command,
        sub_command = ?result.sub_command,
        args = result.args.as_ref().map_or(0, ArgumentList::len),
        "parsed line"
    );
    result
}
