//! Scanner configuration

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Configuration options for the scanner
///
/// Every option defaults to off, so a default scanner only produces word
/// tokens and single- or multi-character operator tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Discard whitespace before each token
    pub ignore_whitespace: bool,
    /// Discard `//` line comments and `/* */` block comments
    pub ignore_comments: bool,
    /// Scan tokens starting with a digit as number literals
    pub scan_numbers: bool,
    /// Scan tokens starting with `'` or `"` as quoted literals
    pub scan_strings: bool,
    /// Characters besides alphanumerics that may appear in words
    pub word_characters: String,
    /// Registered multi-character operators, in registration order
    pub operators: IndexSet<String>,
}

impl ScannerConfig {
    /// Returns true if `ch` may appear in a word token
    pub fn is_word_character(&self, ch: char) -> bool {
        ch.is_alphanumeric() || self.word_characters.contains(ch)
    }

    /// Returns true if `op` is a registered operator
    pub fn is_operator(&self, op: &str) -> bool {
        self.operators.contains(op)
    }

    /// Returns true if at least one registered operator starts with `prefix`
    pub fn is_operator_prefix(&self, prefix: &str) -> bool {
        self.operators.iter().any(|op| op.starts_with(prefix))
    }

    /// Registers an operator; the empty string is ignored
    pub fn add_operator(&mut self, op: &str) {
        if !op.is_empty() {
            self.operators.insert(op.to_string());
        }
    }

    /// Adds extra word characters, skipping ones already present
    pub fn add_word_characters(&mut self, chars: &str) {
        for ch in chars.chars() {
            if !self.word_characters.contains(ch) {
                self.word_characters.push(ch);
            }
        }
    }
}
