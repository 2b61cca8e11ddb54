use crate::error::{ParseError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator used when the caller doesn't pick one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Character that, placed directly before a separator, keeps it from splitting.
pub const ESCAPE_MARKER: char = '\\';

/// A non-empty literal argument separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(String);

impl Separator {
    /// Validates `sep` and wraps it.
    ///
    /// Fails with [`ParseError::EmptySeparator`] for an empty string.
    pub fn new(sep: impl Into<String>) -> Result<Self> {
        let sep = sep.into();
        if sep.is_empty() {
            return Err(ParseError::EmptySeparator);
        }
        Ok(Separator(sep))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator(DEFAULT_SEPARATOR.to_string())
    }
}

impl FromStr for Separator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Separator::new(s)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits `text` on every unescaped occurrence of `separator`.
///
/// The separator is matched literally. An occurrence directly preceded by an
/// unescaped [`ESCAPE_MARKER`] does not split, and the marker is left in place:
/// pieces are returned raw. A marker preceded by another marker is itself
/// escaped, so `\\,` still splits.
///
/// # Example
/// ```
/// let args = cmdparse::split("a\\,b,c", ",").unwrap();
/// assert_eq!(args, vec!["a\\,b", "c"]);
/// ```
pub fn split(text: &str, separator: &str) -> Result<Vec<String>> {
    let separator = Separator::new(separator)?;
    Ok(split_on(text, &separator))
}

/// Same as [`split`], with a separator that is already known to be valid.
pub fn split_on(text: &str, separator: &Separator) -> Vec<String> {
    let sep = separator.as_str();
    let mut args = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    // Set while the previous character is an escape marker that escapes the next one.
    let mut escaped = false;

    while pos < text.len() {
        let rest = &text[pos..];

        if !escaped && rest.starts_with(sep) {
            args.push(text[start..pos].to_string());
            pos += sep.len();
            start = pos;
            continue;
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        escaped = c == ESCAPE_MARKER && !escaped;
        pos += c.len_utf8();
    }

    args.push(text[start..].to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        assert_eq!(split("a,b,c", ",").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_escaped_separator_is_kept() {
        assert_eq!(split(r"a\,b,c", ",").unwrap(), vec![r"a\,b", "c"]);
    }

    #[test]
    fn test_double_escape_still_splits() {
        assert_eq!(split(r"a\\,b", ",").unwrap(), vec![r"a\\", "b"]);
    }

    #[test]
    fn test_triple_escape_is_literal() {
        assert_eq!(split(r"a\\\,b", ",").unwrap(), vec![r"a\\\,b"]);
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(split("a,b,", ",").unwrap(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_leading_and_adjacent_separators() {
        assert_eq!(split(",a,,b", ",").unwrap(), vec!["", "a", "", "b"]);
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(split("hello world", ",").unwrap(), vec!["hello world"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split("", ",").unwrap(), vec![""]);
    }

    #[test]
    fn test_empty_separator_fails() {
        assert_eq!(split("a,b", ""), Err(ParseError::EmptySeparator));
        assert_eq!(split("", ""), Err(ParseError::EmptySeparator));
    }

    #[test]
    fn test_multi_char_separator() {
        assert_eq!(
            split("one || two \\|| three", "||").unwrap(),
            vec!["one ", " two \\|| three"]
        );
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        assert_eq!(split("a.b.c", ".").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(split("a*b", "*").unwrap(), vec!["a", "b"]);
        assert_eq!(split("x(y)z", "(y)").unwrap(), vec!["x", "z"]);
    }

    #[test]
    fn test_overlapping_separator_is_consumed_left_to_right() {
        assert_eq!(split("a,,,b", ",,").unwrap(), vec!["a", ",b"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            split("héllo;wörld;日本", ";").unwrap(),
            vec!["héllo", "wörld", "日本"]
        );
        assert_eq!(split("a→b→c", "→").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_backslash_separator() {
        assert_eq!(split(r"a\b", r"\").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_escape_only_applies_to_next_character() {
        assert_eq!(split(r"a\b,c", ",").unwrap(), vec![r"a\b", "c"]);
    }

    #[test]
    fn test_separator_new() {
        assert_eq!(Separator::new(";").unwrap().as_str(), ";");
        assert_eq!(Separator::new(""), Err(ParseError::EmptySeparator));
        assert_eq!(Separator::default().as_str(), DEFAULT_SEPARATOR);
        assert_eq!("|".parse::<Separator>().unwrap().to_string(), "|");
    }
}
