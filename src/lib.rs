use std::io::Write;
use tracing::debug;

pub mod args;
pub mod builtins;
pub mod error;
pub mod parser;
pub mod splitter;

pub use args::{ArgKind, Argument, ArgumentList, build};
pub use builtins::Builtin;
pub use error::{ParseError, Result};
pub use parser::{ParseResult, parse, parse_on, parse_with};
pub use splitter::{DEFAULT_SEPARATOR, ESCAPE_MARKER, Separator, split, split_on};

/// Result of handling one line in the inspector loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplStatus {
    /// The loop should keep reading lines.
    Continue,
    /// The loop should exit with the provided code.
    Exit(i32),
    /// Subsequent lines should be parsed with this separator.
    SetSeparator(Separator),
}

/// Handles one input line.
///
/// The line is parsed with `separator`. If its command names a `Builtin`, the
/// builtin runs; otherwise a summary of the parse is written to `stdout`.
pub fn handle_line<W: Write, E: Write>(
    line: &str,
    separator: &Separator,
    history: &[String],
    mut stdout: W,
    stderr: E,
) -> ReplStatus {
    let parsed = parse_on(line, separator);

    match parsed.command().parse::<Builtin>() {
        Ok(builtin) => {
            debug!(?builtin, "dispatching builtin");
            builtin.execute(&parsed, &mut stdout, stderr, history, separator)
        }
        Err(_) => {
            let _ = writeln!(stdout, "{}", parsed);
            ReplStatus::Continue
        }
    }
}

/// Builtin names starting with `prefix`, sorted.
pub fn complete_builtin(prefix: &str) -> Vec<&'static str> {
    let mut matches: Vec<&'static str> = builtins::BUILTIN_NAMES
        .iter()
        .copied()
        .filter(|name| name.starts_with(prefix))
        .collect();
    matches.sort_unstable();
    matches
}
