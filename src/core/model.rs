//! Result model
//!
//! Every resolved file maps to one TokenSequence before printing: the
//! leading underscore-separated tokens of its basename, in order.

use std::fmt;

/// Ordered name tokens recovered from a single basename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    #[allow(dead_code)]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<String> for TokenSequence {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// Prints as a bracketed list of double-quoted tokens, e.g.
/// `["Farida", "Bekroukra"]`. An empty sequence prints as `[]`.
impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
