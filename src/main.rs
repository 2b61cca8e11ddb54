mod cli;

use anyhow::Result;
use cli::Cli;
use cmdparse::{ReplStatus, Separator};
use std::{
    io::{self, BufRead, Write},
    process,
};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_args();
    let mut separator = cli.separator;
    let mut history = Vec::new();

    if let Some(line) = cli.line {
        if let Some(code) = step(&line, &mut separator, &mut history) {
            process::exit(code);
        }
        return Ok(());
    }

    if termion::is_tty(&io::stdin()) {
        run_interactive(separator, history)
    } else {
        run_piped(separator, history)
    }
}

/// Runs one line and applies its effect on the loop state.
///
/// Returns the exit code when the line asked to exit.
fn step(line: &str, separator: &mut Separator, history: &mut Vec<String>) -> Option<i32> {
    history.push(line.to_string());
    match cmdparse::handle_line(line, separator, history, io::stdout(), io::stderr()) {
        ReplStatus::Continue => None,
        ReplStatus::Exit(code) => Some(code),
        ReplStatus::SetSeparator(sep) => {
            *separator = sep;
            None
        }
    }
}

/// Reads lines from a non-terminal stdin, one parse per line.
fn run_piped(mut separator: Separator, mut history: Vec<String>) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(code) = step(&line, &mut separator, &mut history) {
            process::exit(code);
        }
    }
    debug!(lines = history.len(), "stdin closed");
    Ok(())
}

fn run_interactive(mut separator: Separator, mut history: Vec<String>) -> Result<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        // Enter raw mode to handle input character by character
        let mut stdout = io::stdout().into_raw_mode()?;
        let stdin = io::stdin();
        let mut buffer = String::new();

        for c in stdin.keys() {
            match c {
                Ok(key) => match key {
                    Key::Ctrl('c') => {
                        buffer.clear();
                        write!(stdout, "\r\n")?;
                        break;
                    }
                    Key::Ctrl('d') => {
                        if buffer.is_empty() {
                            write!(stdout, "\r\n")?;
                            return Ok(());
                        }
                    }
                    Key::Char('\n') | Key::Char('\r') => {
                        write!(stdout, "\r\n")?;
                        break;
                    }
                    Key::Char('\t') => {
                        // Only the command position completes
                        let matches = if buffer.contains(' ') {
                            Vec::new()
                        } else {
                            cmdparse::complete_builtin(&buffer)
                        };

                        if let [name] = matches.as_slice() {
                            let remainder = &name[buffer.len()..];
                            write!(stdout, "{} ", remainder)?;
                            buffer.push_str(remainder);
                            buffer.push(' ');
                        } else {
                            write!(stdout, "\x07")?;
                        }
                        stdout.flush()?;
                    }
                    Key::Backspace => {
                        if !buffer.is_empty() {
                            buffer.pop();
                            // Move cursor back, erase char with space, move back again
                            write!(stdout, "\x08 \x08")?;
                            stdout.flush()?;
                        }
                    }
                    Key::Char(c) => {
                        buffer.push(c);
                        write!(stdout, "{}", c)?;
                        stdout.flush()?;
                    }
                    _ => {}
                },
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    break;
                }
            }
        }

        // Disable raw mode
        drop(stdout);

        // Trailing spaces are significant to the parser, so the line isn't trimmed
        if buffer.trim().is_empty() {
            continue;
        }

        if let Some(code) = step(&buffer, &mut separator, &mut history) {
            process::exit(code);
        }
    }
}
