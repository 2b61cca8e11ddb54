//! Argument list built from the raw pieces produced by the splitter.
//!
//! Every argument keeps two views: the raw substring exactly as scanned, and a
//! cleaned value with invisible characters stripped and whitespace trimmed.

use std::str::FromStr;

/// Zero-width and otherwise invisible characters removed from argument values.
const INVISIBLE_CHARS: [char; 7] = [
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // byte order mark
    '\u{00AD}', // soft hyphen
    '\u{180E}', // mongolian vowel separator
];

/// Removes invisible characters, then trims surrounding whitespace.
pub fn clean_value(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !INVISIBLE_CHARS.contains(c)).collect();
    stripped.trim().to_string()
}

/// A single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    raw: String,
    value: String,
}

impl Argument {
    /// Creates an argument from its raw text, computing the cleaned value.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = clean_value(&raw);
        Self { raw, value }
    }

    /// The substring as scanned, escape markers and whitespace intact.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The cleaned value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Which view of the arguments [`ArgumentList::only`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Every raw substring, empty ones included.
    Raw,
    /// Every cleaned value that isn't empty.
    Value,
}

impl FromStr for ArgKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(ArgKind::Raw),
            "value" => Ok(ArgKind::Value),
            _ => Err(format!("Invalid argument kind: {s}. Expected: raw or value")),
        }
    }
}

/// Immutable, ordered list of arguments in the order they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<Argument>,
}

impl ArgumentList {
    /// Returns a fresh copy of one view of the arguments.
    ///
    /// `ArgKind::Raw` keeps every entry. `ArgKind::Value` drops entries whose
    /// value is empty after cleaning.
    pub fn only(&self, kind: ArgKind) -> Vec<String> {
        match kind {
            ArgKind::Raw => self.args.iter().map(|arg| arg.raw.clone()).collect(),
            ArgKind::Value => self
                .args
                .iter()
                .filter(|arg| !arg.value.is_empty())
                .map(|arg| arg.value.clone())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.args.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.args.iter()
    }

    pub fn as_slice(&self) -> &[Argument] {
        &self.args
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl FromIterator<String> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Argument::new).collect(),
        }
    }
}

/// Builds an argument list from raw substrings, preserving their order.
pub fn build(raw_args: Vec<String>) -> ArgumentList {
    raw_args.into_iter().collect()
}
