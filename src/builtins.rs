use crate::ReplStatus;
use crate::parser::ParseResult;
use crate::splitter::Separator;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

/// Names of every builtin, used for tab completion and `help`.
pub const BUILTIN_NAMES: [&str; 4] = ["exit", "help", "history", "separator"];

/// Enumeration of all supported builtin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Help,
    History,
    Separator,
}

impl FromStr for Builtin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exit" => Ok(Builtin::Exit),
            "help" => Ok(Builtin::Help),
            "history" => Ok(Builtin::History),
            "separator" => Ok(Builtin::Separator),
            _ => Err(()),
        }
    }
}

impl Builtin {
    /// Executes the builtin against an already parsed line.
    ///
    /// Builtins read their single operand from the subcommand slot. Returns a
    /// `ReplStatus` telling the loop whether to continue, exit, or switch
    /// separators.
    pub fn execute<W: Write, E: Write>(
        &self,
        parsed: &ParseResult,
        mut stdout: W,
        mut stderr: E,
        history: &[String],
        separator: &Separator,
    ) -> ReplStatus {
        match self {
            Builtin::Exit => {
                let code = parsed
                    .sub_command()
                    .and_then(|s| s.parse::<i32>().ok())
                    .unwrap_or(0);
                ReplStatus::Exit(code)
            }
            Builtin::Help => {
                help_cmd(&mut stdout);
                ReplStatus::Continue
            }
            Builtin::History => {
                let limit = parsed.sub_command().and_then(|n| n.parse::<usize>().ok());
                history_cmd(history, limit, &mut stdout);
                ReplStatus::Continue
            }
            Builtin::Separator => match parsed.sub_command() {
                None => {
                    let _ = writeln!(stdout, "separator: {:?}", separator.as_str());
                    ReplStatus::Continue
                }
                Some(sep) => match Separator::new(sep) {
                    Ok(sep) => {
                        debug!(separator = %sep, "separator changed");
                        let _ = writeln!(stdout, "separator set to {:?}", sep.as_str());
                        ReplStatus::SetSeparator(sep)
                    }
                    Err(e) => {
                        let _ = writeln!(stderr, "separator: {}", e);
                        ReplStatus::Continue
                    }
                },
            },
        }
    }
}

/// Implementation of the `help` command.
pub fn help_cmd<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "builtins: {}", BUILTIN_NAMES.join(", "));
    let _ = writeln!(writer, "any other line is parsed and summarised");
}

/// Implementation of the `history` command.
///
/// Lists the session's lines with 1-based numbers, optionally only the last `limit`.
pub fn history_cmd<W: Write>(history: &[String], limit: Option<usize>, writer: &mut W) {
    let start_idx = match limit {
        Some(n) => history.len().saturating_sub(n),
        None => 0,
    };

    for (i, line) in history[start_idx..].iter().enumerate() {
        let _ = writeln!(writer, "{:>5}  {}", start_idx + i + 1, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn run(line: &str, history: &[String]) -> (ReplStatus, String, String) {
        let parsed = parse(line);
        let builtin: Builtin = parsed.command().parse().unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = builtin.execute(&parsed, &mut out, &mut err, history, &Separator::default());
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_from_str() {
        assert_eq!("exit".parse::<Builtin>(), Ok(Builtin::Exit));
        assert_eq!("separator".parse::<Builtin>(), Ok(Builtin::Separator));
        assert!("echo".parse::<Builtin>().is_err());
        for name in BUILTIN_NAMES {
            assert!(name.parse::<Builtin>().is_ok());
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run("exit", &[]).0, ReplStatus::Exit(0));
        assert_eq!(run("exit 3", &[]).0, ReplStatus::Exit(3));
        assert_eq!(run("exit nope", &[]).0, ReplStatus::Exit(0));
    }

    #[test]
    fn test_separator_show_and_set() {
        let (status, out, _) = run("separator", &[]);
        assert_eq!(status, ReplStatus::Continue);
        assert_eq!(out, "separator: \",\"\n");

        let (status, out, _) = run("separator ;", &[]);
        assert_eq!(status, ReplStatus::SetSeparator(Separator::new(";").unwrap()));
        assert!(out.contains("\";\""));
    }

    #[test]
    fn test_history_all_and_limited() {
        let history = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let (_, out, _) = run("history", &history);
        assert_eq!(out, "    1  a\n    2  b\n    3  c\n");

        let (_, out, _) = run("history 2", &history);
        assert_eq!(out, "    2  b\n    3  c\n");

        let (_, out, _) = run("history 10", &history);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_help_lists_builtins() {
        let (_, out, err) = run("help", &[]);
        for name in BUILTIN_NAMES {
            assert!(out.contains(name));
        }
        assert!(err.is_empty());
    }
}
